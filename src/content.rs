//! Static marketing copy rendered by the landing and demo pages.

pub struct Package {
    pub name: &'static str,
    pub price: u32,
    pub setup_fee: u32,
    pub features: &'static [&'static str],
    pub recommended: bool,
    /// Unavailable packages offer the waitlist instead of signup.
    pub available: bool,
    pub highlight: Option<&'static str>,
}

impl Package {
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }
}

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct DemoVideo {
    pub id: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
    pub title: &'static str,
}

impl DemoVideo {
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.id)
    }
}

pub static PACKAGES: [Package; 3] = [
    Package {
        name: "Essential",
        price: 249,
        setup_fee: 99,
        features: &[
            "3 weekly automated posts",
            "Custom-tailored local content",
            "Engagement-focused copywriting",
            "Performance analytics",
            "Instant activation - Start today!",
            "30-day money-back guarantee",
        ],
        recommended: true,
        available: true,
        highlight: Some("Perfect for getting started"),
    },
    Package {
        name: "Professional",
        price: 499,
        setup_fee: 199,
        features: &[
            "Everything in Essential Package",
            "Weekly professional AI-generated video",
            "Custom branding integration",
            "Advanced audience targeting",
            "Content calendar planning",
        ],
        recommended: false,
        available: false,
        highlight: None,
    },
    Package {
        name: "Premium",
        price: 749,
        setup_fee: 299,
        features: &[
            "Everything in Professional Package",
            "Weekly AI Digital Twin video",
            "Priority content optimization",
            "Advanced analytics dashboard",
            "Strategic content consultation",
        ],
        recommended: false,
        available: false,
        highlight: None,
    },
];

pub static BENEFITS: [Feature; 4] = [
    Feature {
        title: "AI-Generated Digital Twin",
        description: "Maximize your social media presence with your digital twin while maintaining your personal touch",
    },
    Feature {
        title: "Save 15+ Hours Weekly",
        description: "Focus on closing deals while we handle your social presence",
    },
    Feature {
        title: "300% More Engagement",
        description: "AI-optimized content that resonates with your audience",
    },
    Feature {
        title: "Full Automation",
        description: "Set it and forget it - we handle everything for you",
    },
];

pub static AUTOMATION_STEPS: [Feature; 8] = [
    Feature {
        title: "Strategy Development",
        description: "AI analyzes market trends and your goals",
    },
    Feature {
        title: "Topic Research",
        description: "Identifies high-impact content opportunities",
    },
    Feature {
        title: "Content Creation",
        description: "Generates engaging, market-specific content",
    },
    Feature {
        title: "Editing & SEO",
        description: "Optimizes for maximum visibility",
    },
    Feature {
        title: "Video Design",
        description: "Creates stunning videos",
    },
    Feature {
        title: "Distribution",
        description: "Publishes across all platforms",
    },
    Feature {
        title: "Analytics",
        description: "Tracks performance metrics",
    },
    Feature {
        title: "Optimization",
        description: "Continuously improves results",
    },
];

pub static FAQS: [Faq; 4] = [
    Faq {
        question: "How does AI improve my real estate marketing?",
        answer: "Our AI analyzes market trends, buyer behavior, and engagement patterns to create highly targeted content that resonates with your audience, resulting in better engagement and lead generation.",
    },
    Faq {
        question: "Can I customize the content?",
        answer: "Absolutely! While our AI generates the initial content, you have full control to review and modify any posts before they go live.",
    },
    Faq {
        question: "What kind of ROI can I expect?",
        answer: "Our clients typically see a 3-5x return on investment within the first 6 months through increased leads and closings.",
    },
    Faq {
        question: "Is there a contract commitment?",
        answer: "No long-term contracts required. Our services are month-to-month with a 30-day satisfaction guarantee.",
    },
];

pub static DEMO_VIDEOS: [DemoVideo; 2] = [
    DemoVideo {
        id: "KMGV1TDI7hs",
        heading: "Digital Twin Technology",
        description: "Experience our most advanced AI-powered digital twin",
        title: "AI Content Generation Demo",
    },
    DemoVideo {
        id: "sUxZwTxR9S0",
        heading: "AI-Generated Content",
        description: "See how our AI creates engaging, personalized content for real estate",
        title: "Digital Twin Demo",
    },
];
