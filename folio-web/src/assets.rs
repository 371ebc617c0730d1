//! Static lookup tables the views draw on: social/contact endpoints, the
//! project screenshot catalogue keyed by project id, and the skills
//! inventory. All language-independent by design; translated copy lives in
//! the content catalogue.

pub const GITHUB_URL: &str = "https://github.com/hidarshoja";
pub const EMAIL: &str = "hidarshoja@gmail.com";
pub const PHONE: &str = "09376228320";
pub const PHONE_ALT: &str = "09232996418";
pub const PHONE_HREF: &str = "tel:+989376228320";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/hidar-shoja-413aa4244/";
pub const TELEGRAM_URL: &str = "https://t.me/H_programmer";
pub const TELEGRAM_HANDLE: &str = "@H_programmer";
pub const RUBIKA_URL: &str = "https://rubika.ir/hidar_shoja_programer";
pub const RUBIKA_HANDLE: &str = "@hidar_shoja_programer";

const PROJECT_IMAGES: &[(u32, &str)] = &[
    (1, "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&q=80"),
    (2, "https://images.unsplash.com/photo-1576091160399-112ba8d25d1f?w=600&q=80"),
    (3, "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&q=80"),
    (4, "https://images.unsplash.com/photo-1621761191319-c6fb62004040?w=600&q=80"),
    (5, "https://images.unsplash.com/photo-1610375461246-83df859d849d?w=600&q=80"),
    (6, "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=600&q=80"),
    (7, "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=600&q=80"),
    (8, "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=600&q=80"),
    (9, "https://images.unsplash.com/photo-1501504905252-473c47e087f8?w=600&q=80"),
    (10, "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&q=80"),
    (11, "https://images.unsplash.com/photo-1554224155-6726b3ff858f?w=600&q=80"),
];

/// Screenshot URL for a project id; projects without a dedicated shot reuse
/// the first one.
#[must_use]
pub fn project_image(id: u32) -> &'static str {
    PROJECT_IMAGES
        .iter()
        .find_map(|(pid, url)| (*pid == id).then_some(*url))
        .unwrap_or(PROJECT_IMAGES[0].1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub color: &'static str,
}

pub const FRONTEND_SKILLS: &[Skill] = &[
    Skill { name: "React", level: 95, color: "#61DAFB" },
    Skill { name: "Next.js", level: 90, color: "#ffffff" },
    Skill { name: "JavaScript", level: 95, color: "#F7DF1E" },
    Skill { name: "TypeScript", level: 80, color: "#3178C6" },
    Skill { name: "HTML5", level: 98, color: "#E34F26" },
    Skill { name: "CSS3", level: 95, color: "#1572B6" },
];

pub const FRAMEWORK_SKILLS: &[Skill] = &[
    Skill { name: "Redux", level: 85, color: "#764ABC" },
    Skill { name: "Vite", level: 90, color: "#646CFF" },
];

pub const STYLING_SKILLS: &[Skill] = &[
    Skill { name: "TailwindCSS", level: 95, color: "#06B6D4" },
    Skill { name: "Bootstrap", level: 90, color: "#7952B3" },
    Skill { name: "Sass", level: 85, color: "#CC6699" },
];

pub const TOOL_SKILLS: &[Skill] = &[
    Skill { name: "Git", level: 90, color: "#F05032" },
    Skill { name: "NPM", level: 90, color: "#CB3837" },
    Skill { name: "Figma", level: 75, color: "#F24E1E" },
    Skill { name: "Postman", level: 85, color: "#FF6C37" },
    Skill { name: "Vercel", level: 90, color: "#ffffff" },
];

pub const OTHER_SKILLS: &[&str] = &[
    "REST API",
    "Responsive Design",
    "UI/UX",
    "Performance Optimization",
    "SEO",
    "PWA",
    "Web Accessibility",
    "Cross-Browser Compatibility",
    "Agile/Scrum",
    "Team Leadership",
    "Code Review",
    "Technical Writing",
];
