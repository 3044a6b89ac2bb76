use glam::Vec3;

/// sRGB display color, 0..1 per channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Build a color from a packed `0xRRGGBB` literal.
    pub const fn hex(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as f32 / 255.0,
            g: ((packed >> 8) & 0xff) as f32 / 255.0,
            b: (packed & 0xff) as f32 / 255.0,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

// Theme palette
pub const ACCENT_TEAL: Rgb = Rgb::hex(0x64ffda);
pub const MARKER_NEUTRAL: Rgb = Rgb::hex(0x2a3f5f);
pub const GROUND_NAVY: Rgb = Rgb::hex(0x0a192f);
pub const WHITE: Rgb = Rgb::hex(0xffffff);

/// Outbound link attached to a project marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectLink {
    None,
    Url(&'static str),
}

impl ProjectLink {
    /// Map an href from content data, where `"#"` (or empty) means "no link".
    pub const fn from_href(href: &'static str) -> Self {
        let bytes = href.as_bytes();
        if bytes.is_empty() || (bytes.len() == 1 && bytes[0] == b'#') {
            ProjectLink::None
        } else {
            ProjectLink::Url(href)
        }
    }

    pub fn url(self) -> Option<&'static str> {
        match self {
            ProjectLink::None => None,
            ProjectLink::Url(u) => Some(u),
        }
    }
}

/// One interactive project marker. Static configuration, never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub position: Vec3,
    pub label: &'static str,
    pub description: &'static str,
    pub link: ProjectLink,
    pub accent: Rgb,
}
