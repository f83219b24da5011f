//! Compiled-in site content

use crate::model::{
    Achievement, AchievementKind, NavLink, Profile, Project, ProjectCategory, Skill,
    SkillCategory, SkillProject, SocialLink,
};

const GITHUB_PROFILE: &str = "https://github.com/rustadadam";

pub(crate) fn profile() -> Profile {
    Profile {
        name: "Adam Rustad".to_string(),
        tagline: "Computer Science Student & Developer passionate about building innovative solutions"
            .to_string(),
        headline: "Emerging Software Engineer | Published ML Researcher".to_string(),
        about: vec![
            "Welcome! I'm a computer science researcher and developer with a deep passion for \
             building intelligent, human-centered software. With multiple peer-reviewed \
             publications in machine learning and manifold alignment, I combine academic \
             insight with practical coding skills to deliver innovative solutions."
                .to_string(),
            "I'm particularly driven by projects that challenge me to bridge the gap between \
             theory and real-world application, whether that's creating scalable tools, \
             designing thoughtful interfaces, or training models that learn from complex data. \
             Outside of tech, I recharge by hiking, playing chess, experimenting with emerging \
             technologies, and spending time with those I love."
                .to_string(),
        ],
        interests: [
            "Computer Science",
            "Software Development",
            "Machine Learning",
            "Data Science",
            "Systems Thinking",
            "Outdoor Explorer",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        email: "rustadadam@gmail.com".to_string(),
        location: Some("Vineyard, UT".to_string()),
        photo: Some("/assets/profile.jpg".to_string()),
        socials: vec![
            SocialLink {
                label: "LinkedIn".to_string(),
                caption: "Connect with me on LinkedIn".to_string(),
                url: "https://www.linkedin.com/in/adam-rustad-a43a65299".to_string(),
            },
            SocialLink {
                label: "GitHub".to_string(),
                caption: "View my public projects on GitHub".to_string(),
                url: GITHUB_PROFILE.to_string(),
            },
        ],
    }
}

pub(crate) fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "#home"),
        NavLink::new("About", "#about"),
        NavLink::new("Skills", "#skills"),
        NavLink::new("Projects", "#projects"),
        NavLink::new("Achievements", "#achievements"),
        NavLink::new("Contact", "#contact"),
    ]
}

fn skill(name: &str, projects: &[(&str, &str, &str)]) -> Skill {
    Skill {
        name: name.to_string(),
        projects: projects
            .iter()
            .map(|(name, link, description)| SkillProject {
                name: name.to_string(),
                link: link.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}

fn category(id: &str, name: &str, icon: &str, skills: Vec<Skill>) -> SkillCategory {
    SkillCategory {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        skills,
    }
}

pub(crate) fn skill_categories() -> Vec<SkillCategory> {
    vec![
        category(
            "languages",
            "Programming Languages",
            "code",
            vec![
                skill(
                    "JavaScript/TypeScript",
                    &[
                        (
                            "Smart Task Manager",
                            "#projects",
                            "A React-based productivity app with ML integration",
                        ),
                        (
                            "Virtual Study Buddy",
                            "#projects",
                            "Real-time collaboration platform",
                        ),
                    ],
                ),
                skill(
                    "Python",
                    &[(
                        "Algorithmic Trading Simulator",
                        "#projects",
                        "Platform for testing trading strategies",
                    )],
                ),
            ],
        ),
        category(
            "frontend",
            "Frontend Development",
            "code",
            vec![
                skill(
                    "React & Next.js",
                    &[(
                        "Data Visualization Tool",
                        "#projects",
                        "Interactive data visualization platform",
                    )],
                ),
                skill(
                    "Tailwind CSS",
                    &[(
                        "Personal Portfolio",
                        "#",
                        "This responsive portfolio website",
                    )],
                ),
            ],
        ),
        category(
            "backend",
            "Backend Development",
            "server",
            vec![
                skill(
                    "Node.js & Express",
                    &[(
                        "Smart Task Manager API",
                        "#projects",
                        "RESTful API for task management",
                    )],
                ),
                skill(
                    "MongoDB & SQL",
                    &[(
                        "Virtual Study Buddy",
                        "#projects",
                        "Database design and implementation",
                    )],
                ),
            ],
        ),
        category(
            "tools",
            "Tools & Technologies",
            "pen-tool",
            vec![
                skill(
                    "Git & GitHub",
                    &[(
                        "Open Source Contributions",
                        GITHUB_PROFILE,
                        "Various contributions to open source projects",
                    )],
                ),
                skill(
                    "Docker & AWS",
                    &[(
                        "Algorithmic Trading Simulator",
                        "#projects",
                        "Containerized deployment on AWS",
                    )],
                ),
            ],
        ),
    ]
}

fn project(
    id: u32,
    title: &str,
    description: &str,
    photo: u32,
    technologies: &[&str],
    live: bool,
    category: ProjectCategory,
) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        image: format!(
            "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"
        ),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        live_link: live.then(|| "https://example.com".to_string()),
        github_link: Some("https://github.com".to_string()),
        category,
    }
}

pub(crate) fn projects() -> Vec<Project> {
    vec![
        project(
            1,
            "Smart Task Manager",
            "A productivity app built with React that uses machine learning to prioritize tasks \
             based on user behavior and deadlines.",
            3183150,
            &["React", "Node.js", "MongoDB", "TensorFlow.js"],
            true,
            ProjectCategory::Web,
        ),
        project(
            2,
            "Eco Route Finder",
            "An app that finds the most eco-friendly routes for travel by calculating carbon \
             emissions for different transportation methods.",
            1089438,
            &["React Native", "Google Maps API", "Firebase"],
            true,
            ProjectCategory::Mobile,
        ),
        project(
            3,
            "Virtual Study Buddy",
            "A platform connecting students for virtual study sessions with integrated tools for \
             collaboration and knowledge sharing.",
            7439143,
            &["Next.js", "Socket.io", "PostgreSQL", "WebRTC"],
            true,
            ProjectCategory::Web,
        ),
        project(
            4,
            "Data Visualization Tool",
            "A tool for creating interactive data visualizations from various data sources with \
             export capabilities.",
            669615,
            &["D3.js", "React", "Node.js", "Express"],
            true,
            ProjectCategory::Web,
        ),
        project(
            5,
            "Algorithmic Trading Simulator",
            "A platform for simulating and testing algorithmic trading strategies using \
             historical market data.",
            6801874,
            &["Python", "Pandas", "Django", "Docker"],
            false,
            ProjectCategory::Other,
        ),
        project(
            6,
            "Augmented Reality Campus Tour",
            "A mobile app using AR to provide an interactive tour of the university campus with \
             historical information.",
            2228574,
            &["Unity", "ARCore", "C#", "Blender"],
            true,
            ProjectCategory::Mobile,
        ),
    ]
}

fn achievement(
    id: u32,
    date: &str,
    title: &str,
    description: &str,
    kind: AchievementKind,
) -> Achievement {
    Achievement {
        id,
        date: date.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        kind,
    }
}

pub(crate) fn achievements() -> Vec<Achievement> {
    use AchievementKind::*;

    vec![
        achievement(
            1,
            "June 2021 - Present",
            "Bachelors in Computer Science",
            "Brigham Young University, GPA: 3.91, Dean's List. Minors in Mathematics and \
             Entrepreneurship.",
            Education,
        ),
        achievement(
            2,
            "Oct 2021 - Oct 2023",
            "Missionary Service",
            "Volunteered as a missionary for The Church of Jesus Christ of Latter-day Saints. \
             Provided leadership to the mission unit, worked 70+ hour weeks, and produced \
             monthly performance reports.",
            Experience,
        ),
        achievement(
            3,
            "Nov 2023 - Feb 2024",
            "Research Intern at Allset",
            "Worked as a research intern at Allset. Developed AI-driven product concepts and \
             engaged local businesses to validate solution designs.",
            Experience,
        ),
        achievement(
            4,
            "Jan 2024 - Present",
            "Research Assistant",
            "Engaged as a research assistant focusing on machine learning and data analysis. \
             Designed and implemented code to advance cutting-edge CS research.",
            Experience,
        ),
        achievement(
            5,
            "Dec 2024",
            "Research Publication at ICMLA",
            "Published Graph Integration for Diffusion-Based Manifold Alignment at ICMLA. \
             Introduced novel techniques for improved cross-domain data alignment.",
            Award,
        ),
        achievement(
            6,
            "Dec 2024",
            "Research Publication at IEEE",
            "Published Random Forest-Supervised Manifold Alignment at IEEE Big Data. \
             Demonstrated enhanced performance of manifold alignment in high-dimensional settings.",
            Award,
        ),
        achievement(
            7,
            "Feb 2025",
            "AWS Academy Graduate",
            "Completed AWS Academy Machine Learning Foundations certification. Validated \
             foundational expertise in cloud computing and AWS ML services.",
            Education,
        ),
        achievement(
            8,
            "Mar 2025",
            "Research Publication at SampTA",
            "Published Enabling Out-of-Sample Extension in Semi-Supervised Manifold Alignment at \
             SampTA. Presented a twin autoencoder approach for real-world data extension.",
            Award,
        ),
    ]
}
