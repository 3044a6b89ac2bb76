/// Top-level views of the page. Exactly one is mounted at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Header order.
    pub const ALL: [Section; 3] = [Section::Projects, Section::Skills, Section::Contact];

    /// Identifier used for `data-section` attributes and the page root class.
    pub fn slug(self) -> &'static str {
        match self {
            Section::Projects => "proyectos",
            Section::Skills => "habilidades",
            Section::Contact => "contacto",
        }
    }

    /// Text of the header button.
    pub fn label(self) -> &'static str {
        match self {
            Section::Projects => "Proyectos",
            Section::Skills => "Habilidades",
            Section::Contact => "Contacto",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.slug() == slug)
    }

    /// Whether this section shows the 3D canvas.
    pub fn uses_canvas(self) -> bool {
        self == Section::Projects
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Section,
    pub to: Section,
}

/// Holder of the active section. Only `navigate` writes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    active: Section,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Switch straight to `target`. `None` when it was already active.
    pub fn navigate(&mut self, target: Section) -> Option<Transition> {
        if self.active == target {
            return None;
        }
        let from = std::mem::replace(&mut self.active, target);
        log::info!("[nav] {} -> {}", from.slug(), target.slug());
        Some(Transition { from, to: target })
    }
}
