use std::fmt;

/// All supported variants of CAMs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CamVariant {
    /// Analog CAM. Each cell stores the bounds of an accepted interval.
    Acam,
    /// Analog CAM with double the bit width.
    AcamDouble,
    /// Ternary CAM.
    Tcam,
}

impl CamVariant {
    /// Every variant, in declaration order.
    pub const ALL: [CamVariant; 3] = [CamVariant::Acam, CamVariant::AcamDouble, CamVariant::Tcam];

    /// The amount of elements in a CAM row that encode a single CAM cell.
    #[inline]
    pub const fn cell_encoding_width(self) -> usize {
        match self {
            CamVariant::Acam => 2,
            CamVariant::AcamDouble | CamVariant::Tcam => 1,
        }
    }

    /// Upper-case name, as used in kernel names and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            CamVariant::Acam => "ACAM",
            CamVariant::AcamDouble => "ACAM_DOUBLE",
            CamVariant::Tcam => "TCAM",
        }
    }
}

impl fmt::Display for CamVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
