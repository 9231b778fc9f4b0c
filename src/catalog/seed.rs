//! Product, note, project and workbench collections compiled into the binary.

use crate::models::{
    Activity, ActivityKind, Note, Product, ProductCategory, Project, ProjectStatus, WipItem,
};

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    description: &str,
    price_cents: u32,
    image: &str,
    category: ProductCategory,
    featured: bool,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price_cents,
        image: format!("/images/products/{}", image),
        category,
        in_stock: true,
        featured,
    }
}

/// The storefront catalogue.
pub fn products() -> Vec<Product> {
    use ProductCategory::*;

    vec![
        product(
            1,
            "Arduino Uno R4 WiFi",
            "The latest Arduino Uno with onboard WiFi and a 12x8 LED matrix. Perfect for IoT projects and beginners stepping up.",
            5995,
            "arduino-uno-r4.jpg",
            Microcontrollers,
            true,
        ),
        product(
            2,
            "Raspberry Pi 5 (4GB)",
            "The most powerful Pi yet. Ideal for retro gaming, home servers, AI tinkering, and desktop use.",
            11995,
            "raspberry-pi-5.jpg",
            SingleBoardComputers,
            true,
        ),
        product(
            3,
            "DHT22 Temperature & Humidity Sensor",
            "Reliable digital sensor for weather stations, terrariums, and home automation builds.",
            895,
            "dht22-sensor.jpg",
            Sensors,
            false,
        ),
        product(
            4,
            "0.96\" OLED Display Module (I2C)",
            "Compact, bright, and easy to wire up. Works with Arduino and Pi out of the box.",
            950,
            "oled-display.jpg",
            Displays,
            false,
        ),
        product(
            5,
            "HC-SR04 Ultrasonic Distance Sensor",
            "A maker staple. Great for obstacle detection, robotics, and interactive installations.",
            695,
            "hc-sr04.jpg",
            Sensors,
            false,
        ),
        product(
            6,
            "ESP32 Development Board",
            "Dual-core, WiFi + Bluetooth, dirt cheap. The backbone of countless IoT and smart home projects.",
            1995,
            "esp32-board.jpg",
            Microcontrollers,
            true,
        ),
        product(
            7,
            "Maker Starter Kit — Arduino Edition",
            "Includes an Uno R3, breadboard, jumper wires, resistors, LEDs, and a getting-started guide. Everything needed to build your first circuit.",
            4995,
            "starter-kit.jpg",
            StarterKits,
            true,
        ),
        product(
            8,
            "PIR Motion Sensor Module",
            "Passive infrared sensor for detecting movement. Used in security systems, automatic lights, and interactive projects.",
            750,
            "pir-sensor.jpg",
            Sensors,
            false,
        ),
        product(
            9,
            "Breadboard 830-Point",
            "Full-size solderless breadboard. A workshop essential for prototyping and testing circuits without committing to solder.",
            595,
            "breadboard.jpg",
            Accessories,
            false,
        ),
        product(
            10,
            "40-Pin GPIO Ribbon Cable (Raspberry Pi)",
            "20cm rainbow ribbon cable for connecting your Pi GPIO to a breadboard cleanly and safely.",
            650,
            "gpio-cable.jpg",
            Accessories,
            false,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn note(
    id: u32,
    title: &str,
    excerpt: &str,
    content: &str,
    date: &str,
    category: &str,
    tags: &[&str],
    color: &str,
    read_time: &str,
) -> Note {
    Note {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        date: date.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        color: color.to_string(),
        read_time: read_time.to_string(),
    }
}

/// Lab notes, newest first.
pub fn notes() -> Vec<Note> {
    vec![
        note(
            1,
            "Building a Linux distro from scratch",
            "Learnings from compiling the kernel, configuring BusyBox, and creating bootable ISOs with Syslinux. A deep dive into the foundations of operating systems.",
            "Full walkthrough of building a minimal Linux distribution including kernel compilation, initramfs setup, and bootloader configuration...",
            "Nov 2025",
            "systems",
            &["Linux", "Shell", "Docker"],
            "from-blue-500/20 to-cyan-500/20",
            "12 min",
        ),
        note(
            2,
            "MCP protocol in LLM apps",
            "Implementing Model Context Protocol for seamless AI model interactions with vector databases in RAG apps. Exploring the future of AI agent communication.",
            "Deep dive into MCP protocol implementation...",
            "Apr 2025",
            "ai",
            &["AI", "MCP", "RAG", "LangChain"],
            "from-purple-500/20 to-pink-500/20",
            "8 min",
        ),
        note(
            3,
            "Next.js 16 + Tailwind v4",
            "Exploring the new features in Next.js 16 and migrating to Tailwind CSS v4's new configuration system. Performance improvements and developer experience.",
            "Migration guide and new features overview...",
            "Dec 2024",
            "frontend",
            &["Next.js", "Tailwind", "TypeScript"],
            "from-primary/20 to-emerald-500/20",
            "6 min",
        ),
        note(
            4,
            "Self-hosting LLMs with FastAPI",
            "Running Llama2 locally and building a personal chatbot API for natural language tasks. Complete setup guide with Docker containerization.",
            "Step-by-step guide to self-hosting LLMs...",
            "Oct 2023",
            "ai",
            &["Python", "FastAPI", "Llama2", "Docker"],
            "from-orange-500/20 to-amber-500/20",
            "10 min",
        ),
        note(
            5,
            "Docker multi-stage builds for Next.js",
            "Optimizing container sizes and build times with multi-stage Docker builds. Production-ready configurations for Next.js applications.",
            "Docker optimization techniques...",
            "Sep 2023",
            "devops",
            &["Docker", "Next.js", "CI/CD"],
            "from-cyan-500/20 to-blue-500/20",
            "7 min",
        ),
        note(
            6,
            "React Server Components deep dive",
            "Understanding the paradigm shift with RSC. How server components change data fetching patterns and improve performance.",
            "Complete guide to React Server Components...",
            "Aug 2023",
            "frontend",
            &["React", "RSC", "Next.js"],
            "from-indigo-500/20 to-purple-500/20",
            "9 min",
        ),
    ]
}

/// Categories offered by the notes page filter bar.
pub const NOTE_CATEGORIES: [&str; 5] = ["all", "frontend", "ai", "systems", "devops"];

#[allow(clippy::too_many_arguments)]
fn project(
    id: u32,
    title: &str,
    description: &str,
    tags: &[&str],
    status: ProjectStatus,
    year: &str,
    stars: u32,
    forks: u32,
    repo: &str,
    homepage: Option<&str>,
    featured: bool,
) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        status,
        year: year.to_string(),
        stars,
        forks,
        url: format!("https://github.com/ehsanghaffar/{}", repo),
        homepage: homepage.map(str::to_string),
        featured,
        highlight: false,
    }
}

/// Portfolio projects in display order.
pub fn projects() -> Vec<Project> {
    use ProjectStatus::*;

    let mut einui = project(
        0,
        "EinUI",
        "A collection of beautiful, ready-made Liquid Glass UI components you can preview, copy, and drop into any web app. Built on Tailwind, shadcn/ui, and Radix UI primitives.",
        &["TypeScript", "Next.js 16", "shadcn", "Radix UI", "Tailwind"],
        InProgress,
        "2025",
        8,
        1,
        "einui",
        None,
        true,
    );
    einui.highlight = true;

    vec![
        einui,
        project(
            1,
            "EinBioGPT",
            "An intelligent web application built with Next.js, Tailwind CSS, and OpenAI's GPT models. Generates engaging and personalized bios for social media platforms.",
            &["TypeScript", "Next.js", "GPT", "LangChain"],
            Shipped,
            "2023",
            17,
            8,
            "einbiogpt",
            None,
            true,
        ),
        project(
            2,
            "JavaScript Playground",
            "A collection of JavaScript code snippets, algorithms, and mini-projects for learning and reference purposes.",
            &["JavaScript", "Algorithms", "Snippets"],
            Shipped,
            "2020",
            19,
            5,
            "javascript-playground",
            None,
            false,
        ),
        project(
            3,
            "Next.js 16 Docker Starter",
            "A batteries-included starter for building Next.js 16.1.0 apps with App Router, PNPM, Tailwind v4+, Next-Auth v5, and multi-stage Docker setup.",
            &["Next.js 16.1.0", "Docker", "Tailwind v4"],
            InProgress,
            "2025",
            8,
            4,
            "next16-docker-tw4-starter",
            Some("https://nextjs-16-docker.vercel.app"),
            true,
        ),
        project(
            4,
            "Awesome Clubhouses",
            "Curated list of resources for Clubhouse, the voice-based social network where people come together to talk, listen and learn.",
            &["Python", "Awesome List", "Social"],
            Archived,
            "2022",
            41,
            8,
            "awesome-clubhouse",
            Some("https://ehsanghaffar.github.io/awesome-clubhouse/"),
            false,
        ),
        project(
            5,
            "LLM Practice",
            "A self-hosted personal chatbot API with FastAPI. Interact with Llama2 and other open-source LLMs for natural language conversations.",
            &["Python", "FastAPI", "Llama2", "MCP"],
            Shipped,
            "2023",
            13,
            3,
            "llm-practice",
            None,
            false,
        ),
        project(
            6,
            "Hand-Build Linux",
            "A minimal, customizable Linux distribution built from scratch using the Linux kernel, BusyBox, and Syslinux bootloader.",
            &["Shell", "Linux", "Docker"],
            InProgress,
            "2025",
            8,
            1,
            "handbuilt-linux",
            None,
            true,
        ),
        project(
            7,
            "Next.js AppDir Template",
            "An all-inclusive Next.js web application template showcasing seamless integration of Next.js, Docker, MongoDB, and Tailwind CSS.",
            &["TypeScript", "Next.js", "Docker", "MongoDB"],
            Shipped,
            "2023",
            19,
            6,
            "nextjs-appdir-docker",
            None,
            false,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn wip(
    id: u32,
    name: &str,
    description: &str,
    progress: u8,
    last_updated: &str,
    branch: &str,
    commits: u32,
) -> WipItem {
    WipItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        progress,
        last_updated: last_updated.to_string(),
        url: format!("https://github.com/ehsanghaffar/{}", name),
        branch: branch.to_string(),
        commits,
    }
}

/// Repositories currently in progress.
pub fn wip_items() -> Vec<WipItem> {
    vec![
        wip(
            1,
            "next16-docker-tw4-starter",
            "Next.js 16 starter with App Router, Tailwind v4, Next-Auth v5, and Docker",
            85,
            "Dec 2024",
            "main",
            47,
        ),
        wip(
            2,
            "handbuilt-linux",
            "Minimal Linux distro from scratch with BusyBox and Syslinux bootloader",
            60,
            "Nov 2025",
            "develop",
            32,
        ),
        wip(
            3,
            "einbiogpt",
            "AI-powered social media bio generator with MCP integration",
            90,
            "Apr 2025",
            "main",
            89,
        ),
        wip(
            4,
            "llm-practice",
            "Self-hosted chatbot API with RAG and MCP protocol support",
            75,
            "Apr 2025",
            "feature/mcp",
            56,
        ),
        wip(
            5,
            "einui",
            "Liquid Glass UI components library built on Tailwind and shadcn/ui",
            45,
            "Dec 2024",
            "main",
            28,
        ),
    ]
}

/// Recent workbench activity, newest first.
pub fn recent_activity() -> Vec<Activity> {
    let entry = |kind, project: &str, message: &str, time: &str| Activity {
        kind,
        project: project.to_string(),
        message: message.to_string(),
        time: time.to_string(),
    };

    vec![
        entry(ActivityKind::Commit, "einui", "Add new Button variants", "2 hours ago"),
        entry(
            ActivityKind::Branch,
            "llm-practice",
            "Created feature/mcp branch",
            "5 hours ago",
        ),
        entry(
            ActivityKind::Commit,
            "einbiogpt",
            "Implement MCP protocol handlers",
            "1 day ago",
        ),
        entry(
            ActivityKind::Commit,
            "handbuilt-linux",
            "Update kernel config",
            "2 days ago",
        ),
    ]
}
