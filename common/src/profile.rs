//! サイト本文の固定テキスト

use crate::description::fill_template;

pub const SITE_TITLE: &str = "Portfolio";

pub const ROLE: &str = "Web & Mobile Developer";
pub const NAME: &str = "Vijuksama Hongthongdaeng";
pub const HOME_LINES: [&str; 3] = [
    "I live in Samutprakan Thailand,",
    "I enjoy building software that solves",
    "real people's problems.",
];

pub const ABOUT_DESCRIPTION: &str = "I am a detail-oriented developer with a strong foundation in both frontend and backend technologies. My approach combines creative problem-solving with user-centric design principles to build scalable and efficient solutions.";

const EDUCATION_TEMPLATE: &str = "Currently pursuing a {degree} at {university} ({period}) GPA {gpa}, specializing in {specialization}.";

/// 学歴欄の値
pub struct Education {
    pub degree: &'static str,
    pub university: &'static str,
    pub period: &'static str,
    pub gpa: &'static str,
    pub specialization: &'static str,
}

pub const EDUCATION: Education = Education {
    degree: "Bachelor of Science in Information Technology",
    university: "Silpakorn University",
    period: "2021-2025",
    gpa: "3.06",
    specialization: "Software development, algorithms, databases, and modern web technologies",
};

impl Education {
    pub fn sentence(&self) -> String {
        fill_template(
            EDUCATION_TEMPLATE,
            &[
                ("degree", self.degree),
                ("university", self.university),
                ("period", self.period),
                ("gpa", self.gpa),
                ("specialization", self.specialization),
            ],
        )
    }
}

pub const SKILL_INFO: &str = "My technical expertise spans across various technologies, with a focus on modern development tools and frameworks.";

pub const PROJECT_INFO: &str = "My development journey, featuring web applications, mobile solutions, and design projects. Each project demonstrates my commitment to clean code and innovative solutions.";

pub const CONTACT_INFO: &str = "If you would like to connect with me, please feel free to reach out via email or connect with me on social media.";

/// アイコン付きの外部リンク
pub struct IconLink {
    pub href: &'static str,
    pub icon_key: &'static str,
    pub label: &'static str,
    pub aria_label: &'static str,
}

pub const DOCUMENTS: [IconLink; 2] = [
    IconLink {
        href: "/transcript.pdf",
        icon_key: "education",
        label: "Transcript",
        aria_label: "View academic transcript",
    },
    IconLink {
        href: "/resume.pdf",
        icon_key: "resume",
        label: "Resume",
        aria_label: "View resume",
    },
];

pub const SOCIAL_LINKS: [IconLink; 2] = [
    IconLink {
        href: "https://github.com/NsamaX",
        icon_key: "github",
        label: "GitHub",
        aria_label: "View GitHub profile",
    },
    IconLink {
        href: "https://www.linkedin.com/in/vijuksama-hongthongdaeng-60642a380/",
        icon_key: "linkedin",
        label: "LinkedIn",
        aria_label: "View LinkedIn profile",
    },
];

pub const FOOTER_EMAIL: &str = "vijuksama@gmail.com";
pub const FOOTER_LOCATION: &str = "Samutprakan, Thailand";
pub const COPYRIGHT: &str = "© 2025 Vijuksama Hongthongdaeng";

/// 画面の固定部品が使うアイコン
pub const CHROME_ICON_KEYS: [&str; 11] = [
    "sun",
    "moon",
    "scroll-down",
    "website",
    "mobile",
    "design",
    "link",
    "arrow-left",
    "arrow-right",
    "arrow-up",
    "github",
];
