//! Built-in portfolio content: profile, services, values, work history and
//! projects.

use crate::domain::model::{
    CoreValue, Experience, Hero, Portfolio, Profile, Project, Service, SocialLink,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn portfolio() -> Portfolio {
    Portfolio {
        profile: profile(),
        hero: Hero {
            title: "Expert Ruby on Rails & ReactJS".to_string(),
            subtitle: "Consulting Services".to_string(),
            description: "We help businesses build scalable, maintainable web applications with modern technologies and best practices.".to_string(),
            call_to_action: "Explore Services".to_string(),
        },
        about: strings(&[
            "We're a team of passionate developers and consultants specializing in Ruby on Rails and ReactJS. With years of experience building web applications for startups and enterprises, we bring technical excellence and business insight to every project.",
            "Our mission is simple: help businesses succeed by building exceptional web applications that are fast, scalable, and beautiful. We believe in clean code, modern practices, and building long-term partnerships with our clients.",
        ]),
        tagline: "Building exceptional web applications with Ruby on Rails and ReactJS".to_string(),
        services: services(),
        values: values(),
        experiences: experiences(),
        projects: projects(),
    }
}

fn profile() -> Profile {
    Profile {
        name: "Khiev Sokmesa".to_string(),
        brand: "RailsDev".to_string(),
        headline: "Full-Stack Software Engineer & Technical Leader".to_string(),
        introduction: "Software engineer with more than a decade of experience leading teams and shipping payment, data and AI-powered translation platforms with Ruby on Rails and ReactJS.".to_string(),
        email: "ksokmesa@gmail.com".to_string(),
        links: vec![
            SocialLink {
                label: "LinkedIn".to_string(),
                url: "https://www.linkedin.com/in/sokmesa-khiev-38a4b030/".to_string(),
            },
            SocialLink {
                label: "GitHub".to_string(),
                url: "https://github.com/sokmesakhiev".to_string(),
            },
            SocialLink {
                label: "X".to_string(),
                url: "https://x.com/ksokmesa".to_string(),
            },
        ],
    }
}

fn services() -> Vec<Service> {
    vec![
        Service {
            title: "Ruby on Rails Development".to_string(),
            description: "Robust, secure backends and APIs built on Rails conventions.".to_string(),
            features: strings(&[
                "RESTful APIs",
                "Database design",
                "Authentication & authorization",
                "Background jobs",
                "Automated testing",
            ]),
        },
        Service {
            title: "ReactJS Development".to_string(),
            description: "Fast, accessible user interfaces with modern React.".to_string(),
            features: strings(&[
                "Component libraries",
                "State management",
                "Performance optimization",
                "Modern tooling",
            ]),
        },
        Service {
            title: "Full-Stack Solutions".to_string(),
            description: "End-to-end delivery from database to browser.".to_string(),
            features: strings(&[
                "API integration",
                "Real-time features",
                "Authentication & security",
                "Cloud deployment",
            ]),
        },
        Service {
            title: "Technical Consulting".to_string(),
            description: "Guidance for teams that want to ship faster with fewer surprises.".to_string(),
            features: strings(&[
                "Architecture review",
                "Best practices",
                "Team training",
                "Technical audits",
            ]),
        },
    ]
}

fn values() -> Vec<CoreValue> {
    [
        ("Excellence", "We're committed to delivering top-tier solutions that exceed expectations."),
        ("Collaboration", "We work closely with our clients as true partners in their success."),
        ("Innovation", "We stay ahead of the curve with cutting-edge technologies and practices."),
        ("Passion", "We love what we do and it shows in every project we deliver."),
    ]
    .iter()
    .map(|(title, description)| CoreValue {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            title: "Senior Full-Stack Developer".to_string(),
            company: "OnTheGoSystems".to_string(),
            location: "Remote - Europe".to_string(),
            period: "11/2022 - Present".to_string(),
            company_type: "Software Company".to_string(),
            achievements: strings(&[
                "Led the development of the Private Translation Cloud (PTC), an AI-powered translation engine designed for scalable and secure enterprise use.",
                "Led integration with large language model (LLM) based translation capabilities, significantly improving translation quality and system intelligence.",
                "Contributed to DevOps scalability, including optimization of background job queues and infrastructure migration from EC2 to ECS.",
                "Supported strategic planning with roadmaps and technical insights on the adoption and deployment of AI agents.",
                "Diagnosed and resolved critical production issues through system flow analysis and monitoring with AWS CloudWatch.",
                "Conducted code reviews and mentored developers in a distributed, asynchronous work environment.",
            ]),
        },
        Experience {
            title: "Senior Software Developer Associate".to_string(),
            company: "Z1Data".to_string(),
            location: "Phnom Penh, Cambodia".to_string(),
            period: "03/2021 - 11/2022".to_string(),
            company_type: "Data Company".to_string(),
            achievements: strings(&[
                "Led the development team in building a property valuation application, ensuring scalability and high performance.",
                "Developed and maintained APIs for property and geospatial data integration on the Indication Plus platform.",
                "Oversaw the infrastructure, including application servers and the data warehouse.",
                "Defined a data management roadmap integrating data from multiple sources into a centralized data center.",
                "Optimized data pipelines for efficient indexing and retrieval in the Elasticsearch engine.",
            ]),
        },
        Experience {
            title: "Senior Software Developer".to_string(),
            company: "Bongloy Payments PLC".to_string(),
            location: "Phnom Penh, Cambodia".to_string(),
            period: "10/2018 - 03/2021".to_string(),
            company_type: "Payment Service Provider".to_string(),
            achievements: strings(&[
                "Developed a payment gateway to monitor and manage transactions in real time.",
                "Built a payment processing engine integrating directly with card networks for authorization and settlement.",
                "Designed and implemented a card management system to control and track card transactions.",
                "Developed an Android payment application for money transfers and QR code payments.",
            ]),
        },
        Experience {
            title: "Freelance Software Consultant".to_string(),
            company: "VTenh".to_string(),
            location: "Phnom Penh, Cambodia".to_string(),
            period: "05/2021 - 12/2021".to_string(),
            company_type: "E-Commerce".to_string(),
            achievements: strings(&[
                "Developed the e-commerce backend API for the mobile app.",
                "Developed the e-commerce website and admin dashboard.",
            ]),
        },
        Experience {
            title: "Tech Adviser and Project Manager".to_string(),
            company: "CamSolution".to_string(),
            location: "Phnom Penh, Cambodia".to_string(),
            period: "05/2017 - 01/2018".to_string(),
            company_type: "Software consulting company".to_string(),
            achievements: strings(&[
                "Oversaw team tickets and worked with stakeholders to implement depot management systems.",
                "Supported the development team on technical problems and mentored junior developers.",
                "Supported the business team on feature estimation and roadmap.",
            ]),
        },
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Private Translation Cloud (PTC)".to_string(),
            url: "https://ptc.wpml.org".to_string(),
            description: "AI-powered translation engine designed for scalable and secure enterprise use. Integrated with large language models to enhance translation quality and system intelligence.".to_string(),
            technologies: strings(&["Ruby on Rails", "ReactJS", "AWS ECS", "LLM Integration", ""]),
            company: "OnTheGoSystems".to_string(),
            year: "2023-2024".to_string(),
            demo_url: None,
            source_url: None,
        },
        Project {
            title: "Property Valuation Platform".to_string(),
            url: "#".to_string(),
            description: "Scalable application for automated property valuation with geospatial data integration. Built APIs for real estate data processing and search optimization.".to_string(),
            technologies: strings(&["Ruby on Rails", "PostgreSQL", "Elasticsearch", "AWS", "ReactJS"]),
            company: "Z1Data".to_string(),
            year: "2021-2022".to_string(),
            demo_url: None,
            source_url: None,
        },
        Project {
            title: "Payment Gateway & Processing Engine".to_string(),
            url: "#".to_string(),
            description: "Real-time payment gateway with direct card network integration, covering transaction monitoring, authorization, settlement and card management.".to_string(),
            technologies: strings(&["Ruby on Rails", "PostgreSQL", "Redis", "Card Networks API", "Android"]),
            company: "Bongloy Payments PLC".to_string(),
            year: "2018-2021".to_string(),
            demo_url: None,
            source_url: None,
        },
        Project {
            title: "E-Commerce Platform".to_string(),
            url: "https://www.vtenh.com/".to_string(),
            description: "Full-stack e-commerce solution with backend API, customer-facing website, and admin dashboard for inventory and order management.".to_string(),
            technologies: strings(&["Ruby on Rails", "ReactJS", "PostgreSQL", "Stripe", "AWS"]),
            company: "VTenh".to_string(),
            year: "2021".to_string(),
            demo_url: None,
            source_url: None,
        },
        Project {
            title: "Depot Management System".to_string(),
            url: "#".to_string(),
            description: "Enterprise system for logistics and depot operations management. Led team implementation with stakeholder collaboration.".to_string(),
            technologies: strings(&["Ruby on Rails", "PostgreSQL", "jQuery", "Bootstrap"]),
            company: "CamSolution".to_string(),
            year: "2017-2018".to_string(),
            demo_url: None,
            source_url: None,
        },
    ]
}
