//! Static page content
//!
//! Everything the sections display, compiled into the binary. Records are
//! flat and never mutated.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Handle shown in the hero heading
    pub handle: &'static str,
    /// Display name used in the loader banner and footer
    pub display_name: &'static str,
    pub roles: &'static [&'static str],
    /// Shown after the typewriter caret
    pub role_suffix: &'static str,
    pub email: &'static str,
    pub info_title: &'static str,
    pub info_headline: &'static str,
    pub info_description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub year: &'static str,
    pub title: &'static str,
    pub level: &'static str,
    pub organization: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub images: &'static [&'static str],
    pub team_size: Option<&'static str>,
    pub tosca_version: Option<&'static str>,
    pub workspace: Option<&'static str>,
    pub tools: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub const PROFILE: Profile = Profile {
    handle: "iamvysakh",
    display_name: "IamVysakh",
    roles: &["Quality Analyst", "TOSCA Automation Tester"],
    role_suffix: ",\nfrom India.",
    email: "hi@vysakh.com",
    info_title: "Info",
    info_headline: "I ensure quality and excellence",
    info_description: "I'm a dedicated Quality Analyst and Tosca Tester from India, passionate about \
        ensuring software excellence through rigorous testing and quality assurance practices. \
        With expertise in automated testing and quality control, I help teams deliver flawless \
        products that exceed expectations.",
};

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=1200&h=800&fit=crop";

pub const SKILLS_HEADING: &str = "Technologies I'm Good With";

pub const SKILLS: &[&str] = &[
    "Tosca",
    "Selenium",
    "JIRA",
    "API Testing",
    "SQL",
    "Postman",
    "TestRail",
    "Agile",
    "Jenkins",
    "Git",
    "LoadRunner",
    "Python",
];

pub const CERTIFICATION_BLURB: &str = "This certification demonstrates proficiency in \
    industry-standard testing practices and methodologies, ensuring quality software delivery \
    through comprehensive testing strategies.";

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        year: "2023",
        title: "ISTQB Certified Tester",
        level: "Foundation Level",
        organization: "International Software Testing Qualifications Board",
    },
    Certification {
        year: "2022",
        title: "Tricentis Tosca Certified",
        level: "Automation Specialist Level 1",
        organization: "Tricentis",
    },
    Certification {
        year: "2022",
        title: "Agile Tester Certification",
        level: "Advanced Level",
        organization: "ISTQB",
    },
    Certification {
        year: "2021",
        title: "Certified SAFe Practitioner",
        level: "Scaled Agile Framework",
        organization: "Scaled Agile, Inc.",
    },
    Certification {
        year: "2023",
        title: "Selenium WebDriver",
        level: "Advanced Automation Testing",
        organization: "Test Automation University",
    },
    Certification {
        year: "2021",
        title: "API Testing Professional",
        level: "REST & SOAP Services",
        organization: "Postman",
    },
    Certification {
        year: "2020",
        title: "Performance Testing",
        level: "LoadRunner Certified Professional",
        organization: "Micro Focus",
    },
    Certification {
        year: "2020",
        title: "Test Management",
        level: "JIRA & Test Planning Specialist",
        organization: "Atlassian",
    },
];

pub const EXPERIENCE_HEADING: &str = "Quality Assurance & Testing";

pub const SERVICES: &[Service] = &[
    Service {
        id: "01",
        title: "Test Automation",
        description: "Building robust automated test suites with Selenium, Tosca, and Python",
    },
    Service {
        id: "02",
        title: "Manual Testing & QA",
        description: "Comprehensive testing strategies and quality assurance processes",
    },
    Service {
        id: "03",
        title: "Performance Testing",
        description: "Load and stress testing with LoadRunner and performance optimization",
    },
    Service {
        id: "04",
        title: "API Testing",
        description: "RESTful API testing and validation using Postman and custom frameworks",
    },
    Service {
        id: "05",
        title: "CI/CD Integration",
        description: "Automated testing pipelines with Jenkins and continuous deployment",
    },
    Service {
        id: "06",
        title: "Database Testing",
        description: "SQL query validation and data integrity verification",
    },
    Service {
        id: "07",
        title: "Test Strategy",
        description: "Comprehensive test planning and agile methodology implementation",
    },
    Service {
        id: "08",
        title: "Bug Tracking",
        description: "Efficient defect management using JIRA and TestRail",
    },
    Service {
        id: "09",
        title: "Quality Metrics",
        description: "Test coverage analysis and quality reporting dashboards",
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "8+ Years Experience",
        description: "Delivering quality solutions across multiple industries",
    },
    Highlight {
        title: "End-to-End Testing",
        description: "From test strategy to automation implementation",
    },
    Highlight {
        title: "Agile Methodology",
        description: "Seamless integration with development teams",
    },
];

pub const QUOTE: &str = "Quality is not an act, it is a habit";

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "EDMS - Electronic Document Management System (D2)",
        role: "Automation Test Engineer",
        duration: "Project-based",
        year: "2022-2024",
        description: "Automated regression testing for Thermo Fisher Scientific's document \
            management system, developing the automation framework from scratch using Tosca 14.2.",
        details: "Led the development of comprehensive automation framework covering document \
            creation, approval, submission and printing validations. Optimized functionality \
            using Business Parameters, Test Configuration Parameters, Steering Parameters, and \
            Reusable test step blocks. Successfully integrated Tosca with Micro Focus ALM for \
            execution status updates and generated customized validation reports. Managed \
            application changes across multiple releases (R6, R7, R8).",
        images: &[
            "https://images.unsplash.com/photo-1568667256549-094345857637?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1554224155-8d04cb21cd6c?w=800&h=600&fit=crop",
        ],
        team_size: Some("3"),
        tosca_version: Some("14.2"),
        workspace: Some("AWS"),
        tools: Some("ALM, JIRA, TOSCA"),
    },
    Project {
        id: 2,
        title: "CMD PLM - Oracle Cloud Project Lifecycle Management",
        role: "QA Analyst",
        duration: "Project-based",
        year: "2022-2024",
        description: "Performed regression testing for Thermo Fisher Scientific's Oracle \
            Cloud-based project lifecycle management system with continuous patch release support.",
        details: "Automated various test cases using TOSCA and prepared comprehensive test sheets \
            using Test Case Design (TCD). Integrated Tosca executions with ALM for real-time status \
            updates. Successfully supported multiple Oracle patch releases (22A, 22B, 22C, 22D, \
            23A) and performed regression suite executions after each patch. Generated daily \
            execution reports and maintained defect tracking throughout the project lifecycle.",
        images: &[
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop",
        ],
        team_size: Some("2"),
        tosca_version: Some("14.2"),
        workspace: Some("AWS"),
        tools: Some("Tosca, ALM"),
    },
    Project {
        id: 3,
        title: "SDG Vantaa - Special Diagnostics Group (Oracle)",
        role: "QA Analyst",
        duration: "Project-based",
        year: "2023-2024",
        description: "Executed regression testing for Thermo Fisher Scientific's Oracle \
            Cloud-based Special Diagnostics Group application with focus on quality assurance \
            and continuous integration.",
        details: "Automated different test cases using TOSCA and integrated with Micro Focus ALM \
            for seamless execution tracking. Prepared detailed test sheets using Test Case Design \
            (TCD) and generated daily execution reports. Supported Oracle patch releases (22C, \
            22D, 23A) with comprehensive regression suite executions. Analyzed application \
            changes during releases and incorporated necessary modifications to ensure \
            application stability.",
        images: &[
            "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1504868584819-f8e8b4b6d7e3?w=800&h=600&fit=crop",
        ],
        team_size: Some("2"),
        tosca_version: Some("14.2"),
        workspace: Some("Microsoft 365"),
        tools: Some("Tosca, ALM"),
    },
];

pub const NAV_LINKS: &[Link] = &[
    Link {
        label: "Home",
        href: "#home",
    },
    Link {
        label: "Info",
        href: "#info",
    },
    Link {
        label: "Skills",
        href: "#skills",
    },
    Link {
        label: "Experience",
        href: "#experience",
    },
    Link {
        label: "Certifications",
        href: "#certifications",
    },
    Link {
        label: "Projects",
        href: "#projects",
    },
];

pub const SOCIAL_LINKS: &[Link] = &[
    Link {
        label: "Instagram",
        href: "#instagram",
    },
    Link {
        label: "LinkedIn",
        href: "#linkedin",
    },
    Link {
        label: "GitHub",
        href: "#github",
    },
];

/// Messages revealed by the cursor after long inactivity, one per hint tier
pub const IDLE_HINTS: &[&str] = &[
    "Still there? Scroll to keep exploring.",
    "Click a certification card to open it.",
    "Say hi at hi@vysakh.com",
];

/// Zero-padded two-digit counter, as used for project numbering
pub fn two_digit(n: usize) -> String {
    format!("{n:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_are_in_page_anchors() {
        for link in NAV_LINKS {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
        }
    }

    #[test]
    fn test_service_ids_are_sequential() {
        for (i, service) in SERVICES.iter().enumerate() {
            assert_eq!(service.id, two_digit(i + 1));
        }
    }

    #[test]
    fn test_every_hint_tier_has_a_message() {
        let tiers = crate::core::config::CursorTuning::default().hint_after_ms.len();
        assert_eq!(IDLE_HINTS.len(), tiers);
    }

    #[test]
    fn test_profile_has_roles() {
        assert!(!PROFILE.roles.is_empty());
        assert!(PROFILE.roles.iter().all(|role| !role.is_empty()));
    }

    #[test]
    fn test_projects_have_images() {
        assert!(PROJECTS.iter().all(|project| !project.images.is_empty()));
    }
}
