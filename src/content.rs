//! Authored page content. Everything here is trusted and fixed at compile time.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Purple,
    Pink,
    Green,
    Orange,
    Yellow,
    Blue,
}

#[derive(Debug)]
pub struct Role {
    pub text: &'static str,
    pub color: Accent,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub highlights: &'static [&'static str],
}

pub struct Contribution {
    pub name: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

pub struct Leadership {
    pub role: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
    pub period: &'static str,
}

pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub highlight: &'static str,
    pub accent: Accent,
}

pub struct Milestone {
    pub value: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub struct LeetCodeStats {
    pub total: u32,
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
    pub ranking: &'static str,
    pub acceptance_rate: u32,
}

pub struct GfgStats {
    pub total: u32,
    pub school: u32,
    pub basic: u32,
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
    pub institute_rank: u32,
    pub overall_rank: &'static str,
}

pub struct Activity {
    pub text: &'static str,
    pub when: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Hackathon,
    Conference,
    Workshop,
}

impl EventCategory {
    pub fn label(self) -> &'static str {
        match self {
            EventCategory::Hackathon => "hackathon",
            EventCategory::Conference => "conference",
            EventCategory::Workshop => "workshop",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            EventCategory::Hackathon => Accent::Orange,
            EventCategory::Conference => Accent::Blue,
            EventCategory::Workshop => Accent::Green,
        }
    }
}

pub struct Event {
    pub title: &'static str,
    pub organizer: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub achievement: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub category: EventCategory,
}

/// Badge colour for an event outcome; unknown outcomes read as participation.
pub fn achievement_accent(achievement: &str) -> Accent {
    match achievement {
        "Finalist" => Accent::Yellow,
        "Winner" => Accent::Green,
        "Speaker" => Accent::Purple,
        "Organizer" => Accent::Pink,
        "Lead Instructor" => Accent::Orange,
        "Certified Participant" => Accent::Cyan,
        _ => Accent::Blue,
    }
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct ProfileLink {
    pub label: &'static str,
    pub url: &'static str,
    pub accent: Accent,
}

pub const NAME: &str = "Gaurav Dhakad";
pub const EMAIL: &str = "g4777636@gmail.com";
pub const PHONE: &str = "+91-7668759906";

pub const SUMMARY: &str = "Second-year B.Tech AI/ML student passionate about building scalable, \
real-world software solutions. Finalist in 5+ national-level hackathons with expertise in AI/ML, \
full-stack development, and open-source contributions.";

pub static ROLES: &[Role] = &[
    Role {
        text: "AI/ML Intern",
        color: Accent::Cyan,
    },
    Role {
        text: "SDE Intern",
        color: Accent::Purple,
    },
    Role {
        text: "Tech Community Leader",
        color: Accent::Pink,
    },
    Role {
        text: "Open Source Contributor",
        color: Accent::Green,
    },
];

pub static PRIMARY_LINKS: &[ProfileLink] = &[
    ProfileLink {
        label: "Get in Touch",
        url: "https://wa.me/917668759906",
        accent: Accent::Cyan,
    },
    ProfileLink {
        label: "GitHub",
        url: "https://github.com/Gauravmy",
        accent: Accent::Cyan,
    },
    ProfileLink {
        label: "LinkedIn",
        url: "https://linkedin.com/in/gaurav-dhakad",
        accent: Accent::Purple,
    },
];

pub static SECONDARY_LINKS: &[ProfileLink] = &[
    ProfileLink {
        label: "LeetCode",
        url: "https://leetcode.com/u/g4777636/",
        accent: Accent::Orange,
    },
    ProfileLink {
        label: "GeeksforGeeks",
        url: "https://www.geeksforgeeks.org/user/g4777sov1/",
        accent: Accent::Green,
    },
    ProfileLink {
        label: "Resume",
        url: "/resume",
        accent: Accent::Blue,
    },
];

pub static ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a 3rd year B.Tech student majoring in Artificial Intelligence and Machine Learning at \
     Sanskriti University. My journey is driven by a passion for building scalable, real-world \
     software solutions that make a meaningful impact.",
    "As a finalist in 5+ national-level hackathons and having solved over 1000+ DSA problems across \
     LeetCode and GFG, I bring a strong foundation in algorithms and problem-solving to every \
     project I undertake.",
    "I'm actively shaping the tech community as the cofounder of AI Digitals and a leader in \
     Unstoppable Coders, where I've had the privilege of mentoring 300+ students across India, \
     fostering the next generation of tech innovators.",
];

pub const EDUCATION_DEGREE: &str = "B.Tech in Computer Science (AIML Minor)";
pub const EDUCATION_SCHOOL: &str = "Sanskriti University, Mathura";
pub const EDUCATION_YEARS: &str = "2023-2027";

pub static ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "1000+ DSA Problems Solved",
        description: "700+ on LeetCode, 300+ on GFG",
        highlight: "Top #1 Rank in GFG Institute Leaderboard",
        accent: Accent::Cyan,
    },
    Highlight {
        title: "10+ National Conferences",
        description: "Tech events and workshops attended nationwide",
        highlight: "Active participant in tech community",
        accent: Accent::Purple,
    },
    Highlight {
        title: "SBI Hackathon",
        description: "Participated in State Bank of India Hackathon",
        highlight: "Banking innovation challenge",
        accent: Accent::Orange,
    },
    Highlight {
        title: "IIT Guwahati Certified",
        description: "Completed specialized course from IIT Guwahati",
        highlight: "Prestigious institution certification",
        accent: Accent::Green,
    },
];

pub static FOCUS_AREAS: &[&str] = &[
    "AI/ML Development",
    "Full Stack Development",
    "Open Source",
    "Community Building",
    "DSA & Algorithms",
    "Hackathon Participation",
];

const GITHUB: &str = "https://github.com/Gauravmy";

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Grace – AI Healthcare Assistant",
        description: "Python-based assistant using OpenCV for gesture control and voice commands for \
                      healthcare automation.",
        tech: &["Python", "OpenCV", "AI/ML", "Healthcare", "NLP"],
        github: GITHUB,
        highlights: &[
            "Gesture Control",
            "Voice Commands",
            "Healthcare Automation",
            "Real-time Processing",
        ],
    },
    Project {
        title: "AgriMarket",
        description: "Platform connecting farmers and buyers with real-time pricing and secure \
                      transactions.",
        tech: &["React.js", "Node.js", "MongoDB", "Real-time", "E-commerce"],
        github: GITHUB,
        highlights: &[
            "Real-time Pricing",
            "Secure Transactions",
            "Farmer-Broker Connect",
            "Market Analytics",
        ],
    },
    Project {
        title: "AI Demand Forecasting",
        description: "Machine learning models for forecasting demand in logistics and supply chain \
                      sectors.",
        tech: &["Python", "TensorFlow", "Scikit-learn", "Pandas", "Logistics"],
        github: GITHUB,
        highlights: &[
            "Time Series Analysis",
            "Supply Chain",
            "Logistics Optimization",
            "Predictive Analytics",
        ],
    },
    Project {
        title: "BioPay System",
        description: "Facial-recognition based contactless biometric payment system using Firebase \
                      and TypeScript.",
        tech: &["TypeScript", "Firebase", "Computer Vision", "Fintech", "React"],
        github: GITHUB,
        highlights: &[
            "Facial Recognition",
            "Contactless Payment",
            "Biometric Security",
            "Real-time Processing",
        ],
    },
    Project {
        title: "Portfolio Website",
        description: "Developed and deployed personal portfolio using modern web technologies with \
                      interactive features.",
        tech: &["Rust", "Bevy", "egui", "WebAssembly", "Particles"],
        github: GITHUB,
        highlights: &[
            "Interactive Design",
            "Animated Background",
            "Responsive Layout",
            "Modern Stack",
        ],
    },
];

pub static DSA_MILESTONES: &[Milestone] = &[
    Milestone {
        value: "1000+",
        title: "1000+ Problems Solved",
        description: "Combined across LeetCode and GeeksforGeeks",
        accent: Accent::Yellow,
    },
    Milestone {
        value: "#1",
        title: "Institute Top Rank",
        description: "#1 Rank in GFG Institute Leaderboard",
        accent: Accent::Green,
    },
    Milestone {
        value: "180+",
        title: "Consistency Streak",
        description: "Daily problem solving for 180+ days",
        accent: Accent::Blue,
    },
    Milestone {
        value: "1800+",
        title: "Contest Rating",
        description: "High performance in coding contests",
        accent: Accent::Purple,
    },
];

pub const LEETCODE: LeetCodeStats = LeetCodeStats {
    total: 700,
    easy: 300,
    medium: 350,
    hard: 50,
    ranking: "Top 15%",
    acceptance_rate: 85,
};

pub const GFG: GfgStats = GfgStats {
    total: 300,
    school: 50,
    basic: 100,
    easy: 80,
    medium: 60,
    hard: 10,
    institute_rank: 1,
    overall_rank: "Top 5%",
};

pub const LEETCODE_PROFILE: &str = "https://leetcode.com/u/g4777636/";
pub const GFG_PROFILE: &str = "https://www.geeksforgeeks.org/user/g4777sov1/";

pub static RECENT_ACTIVITY: &[Activity] = &[
    Activity {
        text: "Solved 5 problems today",
        when: "2 hours ago",
        accent: Accent::Green,
    },
    Activity {
        text: "Contest participation - Weekly Contest",
        when: "1 day ago",
        accent: Accent::Blue,
    },
    Activity {
        text: "Achieved 1800+ rating",
        when: "3 days ago",
        accent: Accent::Purple,
    },
];

pub static EVENT_STATS: &[Stat] = &[
    Stat {
        value: "5+",
        label: "Hackathons",
    },
    Stat {
        value: "10+",
        label: "Conferences",
    },
    Stat {
        value: "15+",
        label: "Workshops",
    },
    Stat {
        value: "4",
        label: "Finalist",
    },
];

pub static EVENTS: &[Event] = &[
    Event {
        title: "SBI Hackathon",
        organizer: "State Bank of India",
        date: "March 2024",
        location: "Virtual",
        achievement: "Participant",
        description: "Participated in SBI's flagship hackathon focusing on banking innovation and \
                      digital transformation solutions.",
        tech: &["Fintech", "Digital Banking", "API Integration", "Security"],
        category: EventCategory::Hackathon,
    },
    Event {
        title: "Smart India Hackathon",
        organizer: "Government of India",
        date: "December 2023",
        location: "National Level",
        achievement: "Finalist",
        description: "Reached finals in India's largest hackathon with an innovative solution for \
                      smart city challenges.",
        tech: &["IoT", "Smart Cities", "Data Analytics", "Mobile Development"],
        category: EventCategory::Hackathon,
    },
    Event {
        title: "Flipkart GRiD",
        organizer: "Flipkart",
        date: "October 2023",
        location: "Bangalore",
        achievement: "Finalist",
        description: "Selected as finalist in Flipkart's GRiD hackathon, competing with top talent \
                      across India.",
        tech: &["E-commerce", "Logistics", "AI/ML", "Web Development"],
        category: EventCategory::Hackathon,
    },
    Event {
        title: "Walmart Sparkathon",
        organizer: "Walmart",
        date: "August 2023",
        location: "Virtual",
        achievement: "Finalist",
        description: "Finalist in Walmart's innovation challenge focusing on retail technology and \
                      supply chain optimization.",
        tech: &["Retail Tech", "Supply Chain", "Data Science", "Cloud Computing"],
        category: EventCategory::Hackathon,
    },
    Event {
        title: "IIT Guwahati Tech Conference",
        organizer: "IIT Guwahati",
        date: "July 2023",
        location: "Guwahati",
        achievement: "Certified Participant",
        description: "Attended and completed certification at IIT Guwahati's premier technology \
                      conference.",
        tech: &["AI/ML", "Research", "Innovation", "Technology Trends"],
        category: EventCategory::Conference,
    },
    Event {
        title: "National AI Summit",
        organizer: "NITI Aayog",
        date: "May 2023",
        location: "New Delhi",
        achievement: "Speaker",
        description: "Invited speaker at National AI Summit, presenting on AI applications in \
                      healthcare automation.",
        tech: &["AI/ML", "Healthcare", "Automation", "Ethics"],
        category: EventCategory::Conference,
    },
    Event {
        title: "Web Development Workshop",
        organizer: "Google Developer Groups",
        date: "April 2023",
        location: "Mathura",
        achievement: "Organizer",
        description: "Organized and conducted a comprehensive web development workshop for 100+ \
                      students.",
        tech: &["Web Development", "React", "Node.js", "Modern JavaScript"],
        category: EventCategory::Workshop,
    },
    Event {
        title: "Machine Learning Bootcamp",
        organizer: "AI Digitals",
        date: "February 2023",
        location: "Sanskriti University",
        achievement: "Lead Instructor",
        description: "Led a week-long ML bootcamp, training 50+ students on practical ML \
                      applications.",
        tech: &["Machine Learning", "Python", "TensorFlow", "Data Science"],
        category: EventCategory::Workshop,
    },
];

pub static CONTRIBUTIONS: &[Contribution] = &[
    Contribution {
        name: "Hyperswitch",
        description: "Enterprise-grade open-source payment processing system",
        link: "https://github.com/juspay/hyperswitch",
    },
    Contribution {
        name: "llm-app",
        description: "RAG pipeline and LLM application framework",
        link: "https://github.com/pathwaycom/llm-app",
    },
    Contribution {
        name: "pathway",
        description: "Stream processing and real-time data analytics",
        link: "https://github.com/pathwaycom/pathway",
    },
    Contribution {
        name: "Walmart Sparkathon",
        description: "Contributed to Walmart Sparkathon projects and idea banks",
        link: GITHUB,
    },
];

pub static LEADERSHIP: &[Leadership] = &[
    Leadership {
        role: "Cofounder",
        organization: "AI Digitals",
        description: "Led the creation of a student-focused tech hub promoting AI, DSA, and \
                      innovation. Mentored 300+ students, hosted 15+ events/workshops.",
        period: "2023 - Present",
    },
    Leadership {
        role: "Community Leader",
        organization: "Unstoppable Coders",
        description: "Fostering collaborative learning through live sessions, mentorship programs, \
                      and national hackathon prep.",
        period: "2023 - Present",
    },
    Leadership {
        role: "Vice Secretary",
        organization: "Technical Club, Sanskriti University",
        description: "Organized intercollege tech events, managed speaker sessions, and promoted \
                      coding culture in the university.",
        period: "2023 - Present",
    },
];

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "Machine Learning",
        issuer: "Coursera - Andrew Ng",
        year: "2023",
    },
    Certification {
        name: "AI Fundamentals",
        issuer: "Microsoft",
        year: "2023",
    },
    Certification {
        name: "Python for Data Science",
        issuer: "Great Learning",
        year: "2023",
    },
    Certification {
        name: "Web Development",
        issuer: "HTML, CSS, JavaScript Projects",
        year: "2023",
    },
];

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages",
        skills: &["Python", "Java", "C", "C++", "JavaScript", "TypeScript"],
    },
    SkillGroup {
        category: "Web Development",
        skills: &["HTML", "CSS", "React.js", "Firebase", "GitHub Pages"],
    },
    SkillGroup {
        category: "AI/ML Libraries",
        skills: &["TensorFlow", "Scikit-learn", "Pandas", "NumPy", "OpenCV"],
    },
    SkillGroup {
        category: "Tools & Platforms",
        skills: &["GitHub", "VS Code", "Jupyter", "Firebase", "Linux", "Google Cloud"],
    },
    SkillGroup {
        category: "Soft Skills",
        skills: &["Communication", "Team Management", "Leadership", "Public Speaking"],
    },
];

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Hackathon Finalist",
        description: "Finalist in 5+ national-level hackathons including Flipkart GRiD, Smart India \
                      Hackathon, Walmart Sparkathon",
    },
    Achievement {
        title: "Coding Excellence",
        description: "Solved 1000+ coding questions (700+ on LeetCode, 300+ on GFG)",
    },
    Achievement {
        title: "GitHub Contributions",
        description: "Maintaining 40+ repositories related to AI, automation, and full-stack tools",
    },
    Achievement {
        title: "Community Growth",
        description: "Mentored 300+ peers through AI Digitals and Unstoppable Coders, helping them \
                      grow in DSA and AI",
    },
];

pub static CONTACT_LINKS: &[ProfileLink] = &[
    ProfileLink {
        label: "linkedin.com/in/gaurav-dhakad",
        url: "https://linkedin.com/in/gaurav-dhakad",
        accent: Accent::Blue,
    },
    ProfileLink {
        label: "github.com/Gauravmy",
        url: GITHUB,
        accent: Accent::Green,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_titles_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[test]
    fn unknown_outcomes_fall_back_to_participant_badge() {
        assert_eq!(achievement_accent("Participant"), Accent::Blue);
        assert_eq!(achievement_accent("Honourable Mention"), Accent::Blue);
        assert_eq!(achievement_accent("Finalist"), Accent::Yellow);
    }
}
