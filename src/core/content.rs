use super::marker::{Marker, ProjectLink, Rgb};
use glam::Vec3;

// Portfolio content. Everything the page shows is defined here at compile time.

pub const SITE_OWNER: &str = "Andrés Suárez";

pub const PROJECTS: [Marker; 3] = [
    Marker {
        position: Vec3::new(-4.0, 0.0, 0.0),
        label: "Portafolio Web (React)",
        description: "Mi primer portafolio interactivo.",
        link: ProjectLink::from_href("https://andressuarez-portafolio.github.io/portafolio/"),
        accent: Rgb::hex(0x64ffda),
    },
    Marker {
        position: Vec3::new(0.0, 0.0, -5.0),
        label: "App de Clima (React)",
        description: "Una aplicación que muestra el clima de Neiva.",
        link: ProjectLink::from_href("#"),
        accent: Rgb::hex(0x8984d7),
    },
    Marker {
        position: Vec3::new(4.0, 0.0, 0.0),
        label: "Juego Simple 3D",
        description: "Un pequeño juego hecho con Three.js.",
        link: ProjectLink::from_href("#"),
        accent: Rgb::hex(0xff6b6b),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const SKILLS: [Skill; 4] = [
    Skill {
        name: "React",
        description: "Desarrollo de interfaces modernas y dinámicas",
        icon: "⚛️",
    },
    Skill {
        name: "HTML & CSS",
        description: "Diseño responsivo y maquetación semántica",
        icon: "🎨",
    },
    Skill {
        name: "JavaScript",
        description: "Programación interactiva del lado cliente",
        icon: "💻",
    },
    Skill {
        name: "Git & GitHub",
        description: "Control de versiones y colaboración",
        icon: "🔧",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Profile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactAction {
    pub kind: ContactKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

impl ContactAction {
    /// Profile pages leave the portfolio; mail and phone hand off to the OS.
    pub fn opens_new_tab(&self) -> bool {
        self.kind == ContactKind::Profile
    }
}

pub const CONTACTS: [ContactAction; 3] = [
    ContactAction {
        kind: ContactKind::Email,
        label: "andresssuarez11@gmail.com",
        icon: "📧",
        href: "mailto:andresssuarez11@gmail.com",
    },
    ContactAction {
        kind: ContactKind::Phone,
        label: "3185251155",
        icon: "📱",
        href: "tel:3185251155",
    },
    ContactAction {
        kind: ContactKind::Profile,
        label: "GitHub",
        icon: "🐙",
        href: "https://github.com/andresSuarez-portafolio",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identity {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
}

pub const IDENTITY: Identity = Identity {
    name: SITE_OWNER,
    role: "Desarrollador Web Frontend",
    location: "Neiva, Huila 🇨🇴",
};

pub const SKILLS_TITLE: &str = "Mis Habilidades";
pub const CONTACT_TITLE: &str = "Contáctame";
pub const PROJECT_LINK_TEXT: &str = "Ver Proyecto →";
pub const FOOTER_TEXT: &str = "© 2025 Andrés Suárez • Creado con Rust & WebGPU";
