//! Static copy for every page section.

pub const OWNER: &str = "Navdeep Shah";
pub const TITLE: &str = "Navdeep Shah | Software Developer from Uttarakhand";
pub const DESCRIPTION: &str = "Design-driven Software Engineer from Dehradun, Uttarakhand specializing in AR/VR, 3D development, web & mobile applications. Building immersive digital experiences.";
pub const LOCATION: &str = "Dehradun, Uttarakhand";

pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct Social {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub colour: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub period: &'static str,
    pub colour: &'static str,
    pub github: &'static str,
    pub live: Option<&'static str>,
    pub technologies: &'static [&'static str],
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub colour: &'static str,
}

pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
    pub icon: &'static str,
}

pub const NAV_LINKS: &[Link] = &[
    Link {
        label: "Home",
        href: "#home",
    },
    Link {
        label: "About",
        href: "#about",
    },
    Link {
        label: "Experience",
        href: "#experience",
    },
    Link {
        label: "Projects",
        href: "#projects",
    },
    Link {
        label: "Skills",
        href: "#tech",
    },
    Link {
        label: "Freelancing",
        href: "#freelancing",
    },
    Link {
        label: "Contact",
        href: "#contact",
    },
];

pub const SOCIALS: &[Social] = &[
    Social {
        name: "LinkedIn",
        href: "https://linkedin.com/in/navdeep-shah-a56982207",
        icon: "linkedin",
    },
    Social {
        name: "GitHub",
        href: "https://github.com/oNavShaHo",
        icon: "github",
    },
];

pub const EMAIL: &str = "navdeepshahof@gmail.com";

pub struct Hero {
    pub badge: &'static str,
    pub greeting: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub stats: &'static [Stat],
}

pub const HERO: Hero = Hero {
    badge: LOCATION,
    greeting: "नमस्कार (Namaste)",
    name: "I'm Navdeep Shah",
    role: "Software Developer",
    bio: "Design-driven software engineer specializing in AI-powered media systems, AR/3D experiences, and full-stack platforms. Building end-to-end products with LLMs, retrieval pipelines, and automation.",
    stats: &[
        Stat {
            value: "1.5+",
            label: "Years Experience",
        },
        Stat {
            value: "20+",
            label: "Clients Served",
        },
        Stat {
            value: "114+",
            label: "NPM Downloads",
        },
    ],
};

pub struct About {
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub paragraph: &'static str,
    pub highlights: &'static [&'static str],
}

pub const ABOUT: About = About {
    eyebrow: "About Me",
    heading: "Crafting Digital Experiences",
    paragraph: "Design-driven software engineer with expertise in AI-powered media systems, AR/3D experiences, and full-stack platforms. Proven ability to deliver end-to-end products combining LLMs, retrieval pipelines, and automation to drive measurable user engagement and business impact.",
    highlights: &[
        "AR/VR & 3D Development Expert",
        "Full-stack Web Applications",
        "Mobile App Development",
        "High-ownership Delivery",
        "Problem Solver",
        "VIT Bhopal Graduate (8.31 CGPA)",
    ],
};

pub const RESUME_FILENAME: &str = "Navdeep_Shah_Resume.pdf";

pub struct SectionHeading {
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub lead: &'static str,
}

pub const EXPERIENCE_HEADING: SectionHeading = SectionHeading {
    eyebrow: "Experience",
    heading: "Professional Journey",
    lead: "Building impactful solutions that serve clients across the globe, from the tranquil valleys of Uttarakhand.",
};

pub const EXPERIENCES: &[Experience] = &[Experience {
    company: "Hello AR",
    role: "Software Engineer (Remote)",
    period: "April 2024 – November 2025",
    colour: "#4ade80",
    achievements: &[
        "Engineered Magic Media platform end-to-end (frontend, backend APIs, async workers), onboarding 20+ US clients",
        "Developed AI-driven content automation: fetches Instagram data, maps feature via embeddings, generates optimized video content, schedules posts at best-performing times",
        "Created RAG-powered semantic retrieval pipeline for accurate feature-to-media mapping and AI generation",
        "Delivered AR/WebAR solutions for top brands: project 3D models into real environments using Three.js and Web",
        "Optimized platform performance: multithreading, API optimization, and legacy 3D viewer maintenance",
        "Automated Instagram client outreach via Chrome extension, improving engagement efficiency by 200%",
    ],
    technologies: &[
        "React.js",
        "Next.js",
        "Python",
        "Three.js",
        "WebGL",
        "Node.js",
        "RAG",
        "LLM",
        "Embeddings",
    ],
}];

pub const PROJECTS_HEADING: SectionHeading = SectionHeading {
    eyebrow: "Projects",
    heading: "Things I've Built",
    lead: "From AR applications to real-time collaboration tools, here are some projects that showcase my journey.",
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Open World Portfolio",
        description: "Browser-based open-world first-person portfolio built with Blender + Three.js. An immersive 3D experience to explore my digital world.",
        period: "November 2024 - Ongoing",
        colour: "#4ade80",
        github: "https://github.com/oNavShaHo/3d_nav_porfolio",
        live: Some("https://3d-nav-porfolio.vercel.app/"),
        technologies: &["Three.js", "Blender", "JavaScript", "WebGL"],
    },
    Project {
        title: "ArDimensions",
        description: "Android AR app calculating real-world distances using SceneView + Euclidean distance. Detects horizontal planes and measures distances between selected points.",
        period: "May 2024",
        colour: "#f97316",
        github: "https://github.com/oNavShaHo/ArDimensions",
        live: None,
        technologies: &["ARCore", "Kotlin", "SceneView", "Android"],
    },
    Project {
        title: "Moveefy",
        description: "Real-time synchronized movie-watching web app using WebSockets + Next.js. Optimized network latency and sync; delivered robust communication channel.",
        period: "February - March 2024",
        colour: "#60a5fa",
        github: "https://github.com/oNavShaHo/moveefy_sync",
        live: Some("https://moveefy-sync.vercel.app/"),
        technologies: &["Next.js", "WebSocket", "Real-time", "TypeScript"],
    },
    Project {
        title: "code-user-input",
        description: "Npm package for reusable JS input handling → 114 downloads first week. Provides 4 data type functions to easily take user input in JavaScript.",
        period: "December 2023 - January 2024",
        colour: "#a78bfa",
        github: "https://github.com/oNavShaHo/user-input",
        live: Some("https://www.npmjs.com/package/code-user-input"),
        technologies: &["Node.js", "NPM", "JavaScript", "CLI"],
    },
];

pub const TECH_HEADING: SectionHeading = SectionHeading {
    eyebrow: "Skills",
    heading: "My Tech Universe",
    lead: "The tools and technologies I use to bring ideas to life.",
};

pub const EXTRA_SKILLS: &[&str] = &[
    "RAG Pipelines",
    "LLM Integration",
    "Embeddings",
    "Prompt Engineering",
    "WebGL",
    "WebAR",
    "ARCore",
    "SceneView",
    "REST APIs",
    "Workers",
    "Multithreading",
    "Chrome Extensions",
    "npm",
    "Git",
    "CI/CD",
    "Agile/Scrum",
];

pub struct Freelancing {
    pub badge: &'static str,
    pub heading: &'static str,
    pub lead: &'static str,
    pub pitch_heading: &'static str,
    pub pitch: &'static str,
    pub points: &'static [&'static str],
    pub services: &'static [Service],
}

pub const FREELANCING: Freelancing = Freelancing {
    badge: "Available for Hire",
    heading: "I Take Freelancing Work",
    lead: "Looking for a developer to bring your vision to life? Let's collaborate on your next project.",
    pitch_heading: "Let's Build Something Amazing",
    pitch: "I specialize in creating cutting-edge digital experiences that combine beautiful design with powerful functionality. Whether you need a web app, mobile application, AR experience, or AI-powered solution, I'm here to help.",
    points: &[
        "End-to-end project delivery",
        "Modern tech stack expertise",
        "Responsive communication",
        "Quality-focused development",
    ],
    services: &[
        Service {
            title: "Web Development",
            description: "Full-stack web applications with modern frameworks",
            colour: "#4ade80",
        },
        Service {
            title: "3D & AR Experiences",
            description: "Immersive 3D interfaces and AR applications",
            colour: "#f97316",
        },
        Service {
            title: "AI Integration",
            description: "LLM-powered features and automation systems",
            colour: "#60a5fa",
        },
        Service {
            title: "Mobile Apps",
            description: "Native and cross-platform mobile solutions",
            colour: "#a78bfa",
        },
    ],
};

pub const CONTACT_HEADING: SectionHeading = SectionHeading {
    eyebrow: "Get In Touch",
    heading: "Let's Connect",
    lead: "Whether you have a project in mind or just want to say hello, I'd love to hear from you.",
};

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        label: "Email",
        value: EMAIL,
        href: Some("mailto:navdeepshahof@gmail.com"),
        icon: "mail",
    },
    ContactInfo {
        label: "Phone",
        value: "+91 7830708045",
        href: Some("tel:+917830708045"),
        icon: "phone",
    },
    ContactInfo {
        label: "Location",
        value: LOCATION,
        href: None,
        icon: "map-pin",
    },
];

pub struct Footer {
    pub tagline: &'static str,
    pub location: &'static str,
    pub skills: &'static [Link],
    pub navigation: &'static [Link],
    pub signature: &'static str,
}

pub const FOOTER: Footer = Footer {
    tagline: "Software Developer from Dehradun, Uttarakhand. Building immersive digital experiences.",
    location: "Dehradun, Uttarakhand, India",
    skills: &[
        Link {
            label: "AR/VR Development",
            href: "#projects",
        },
        Link {
            label: "3D Development",
            href: "#projects",
        },
        Link {
            label: "Web Development",
            href: "#projects",
        },
        Link {
            label: "Mobile Development",
            href: "#projects",
        },
    ],
    navigation: &[
        Link {
            label: "About",
            href: "#about",
        },
        Link {
            label: "Experience",
            href: "#experience",
        },
        Link {
            label: "Projects",
            href: "#projects",
        },
        Link {
            label: "Contact",
            href: "#contact",
        },
    ],
    signature: "Crafted with passion in Uttarakhand",
};
