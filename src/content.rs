//! Static copy for the landing page sections.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub short_description: &'static str,
    pub full_description: &'static str,
    pub benefits: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub number: u8,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub initials: &'static str,
    pub quote: &'static str,
    pub rating: u8,
    pub metrics: &'static [Stat],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "95%", label: "Match Accuracy" },
    Stat { value: "60%", label: "Time Saved" },
    Stat { value: "500+", label: "Companies" },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        id: "ai-matching",
        icon: "✦",
        title: "AI-Powered Matching",
        short_description: "Intelligent candidate matching using advanced algorithms",
        full_description: "Our proprietary AI engine analyzes thousands of data points to match candidates with job requirements, ensuring perfect fit every time.",
        benefits: &[
            "95% accuracy rate",
            "Reduces screening time by 70%",
            "Eliminates unconscious bias",
            "Continuous learning improvement",
        ],
    },
    Feature {
        id: "smart-screening",
        icon: "◎",
        title: "Smart Screening",
        short_description: "Automated resume parsing and candidate evaluation",
        full_description: "Advanced NLP technology extracts key information from resumes and evaluates candidates against your specific criteria automatically.",
        benefits: &[
            "Instant resume analysis",
            "Custom scoring models",
            "Multi-language support",
            "Integration with ATS systems",
        ],
    },
    Feature {
        id: "predictive-analytics",
        icon: "◉",
        title: "Predictive Analytics",
        short_description: "Data-driven insights for better hiring decisions",
        full_description: "Leverage historical hiring data and market trends to predict candidate success and optimize your recruitment strategy.",
        benefits: &[
            "Success prediction models",
            "Market salary insights",
            "Hiring timeline optimization",
            "ROI tracking",
        ],
    },
    Feature {
        id: "real-time-dashboard",
        icon: "▤",
        title: "Real-time Dashboard",
        short_description: "Comprehensive recruitment analytics and reporting",
        full_description: "Monitor your entire recruitment pipeline with detailed analytics, performance metrics, and customizable reports.",
        benefits: &[
            "Live pipeline tracking",
            "Custom report builder",
            "Team performance metrics",
            "Export capabilities",
        ],
    },
    Feature {
        id: "candidate-experience",
        icon: "☺",
        title: "Enhanced Experience",
        short_description: "Streamlined application process for candidates",
        full_description: "Create a seamless, engaging experience for candidates with personalized communication and transparent process updates.",
        benefits: &[
            "Mobile-optimized applications",
            "Automated communications",
            "Progress tracking",
            "Feedback collection",
        ],
    },
    Feature {
        id: "integration-hub",
        icon: "⚡",
        title: "Integration Hub",
        short_description: "Connect with your existing HR tech stack",
        full_description: "Seamlessly integrate with popular HRIS, ATS, and communication tools to create a unified recruitment ecosystem.",
        benefits: &[
            "50+ integrations",
            "API-first architecture",
            "Single sign-on",
            "Data synchronization",
        ],
    },
];

pub const STEPS: &[Step] = &[
    Step {
        number: 1,
        icon: "⇪",
        title: "Upload & Configure",
        description: "Start by uploading job requirements and configuring your ideal candidate profile with our intuitive setup wizard.",
        details: &[
            "Define role requirements",
            "Set skill priorities",
            "Configure screening criteria",
            "Customize evaluation metrics",
        ],
    },
    Step {
        number: 2,
        icon: "⌕",
        title: "AI Matching Engine",
        description: "Our advanced AI analyzes millions of candidate profiles to find the perfect matches based on your specific criteria.",
        details: &[
            "Intelligent profile scanning",
            "Multi-dimensional matching",
            "Bias-free evaluation",
            "Real-time scoring",
        ],
    },
    Step {
        number: 3,
        icon: "✓",
        title: "Review & Select",
        description: "Review AI-ranked candidates with detailed insights and make data-driven hiring decisions with confidence.",
        details: &[
            "Ranked candidate list",
            "Detailed match analysis",
            "Interview recommendations",
            "Hiring probability scores",
        ],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "sarah-chen",
        name: "Sarah Chen",
        role: "Head of Talent Acquisition",
        company: "TechFlow Inc.",
        initials: "SC",
        quote: "RecruitPro AI has revolutionized our hiring process. We've reduced time-to-hire by 60% while significantly improving candidate quality. The AI matching is incredibly accurate.",
        rating: 5,
        metrics: &[
            Stat { value: "60%", label: "Time Saved" },
            Stat { value: "85%", label: "Quality Improvement" },
        ],
    },
    Testimonial {
        id: "michael-rodriguez",
        name: "Michael Rodriguez",
        role: "VP of Human Resources",
        company: "Growth Dynamics",
        initials: "MR",
        quote: "The predictive analytics feature helped us identify top performers before our competitors. Our successful hire rate has increased dramatically since implementing RecruitPro AI.",
        rating: 5,
        metrics: &[
            Stat { value: "92%", label: "Success Rate" },
            Stat { value: "150%", label: "ROI Increase" },
        ],
    },
    Testimonial {
        id: "emily-johnson",
        name: "Emily Johnson",
        role: "Recruitment Director",
        company: "InnovateHub",
        initials: "EJ",
        quote: "The platform's ability to eliminate bias while maintaining accuracy is outstanding. We've built more diverse teams and our employee retention has improved significantly.",
        rating: 5,
        metrics: &[
            Stat { value: "40%", label: "Diversity Increase" },
            Stat { value: "30%", label: "Retention Improvement" },
        ],
    },
    Testimonial {
        id: "david-kim",
        name: "David Kim",
        role: "Chief People Officer",
        company: "ScaleUp Solutions",
        initials: "DK",
        quote: "RecruitPro AI scales with our rapid growth. The automation features handle high-volume recruiting while maintaining personalized candidate experiences.",
        rating: 5,
        metrics: &[
            Stat { value: "500%", label: "Volume Handled" },
            Stat { value: "70%", label: "Efficiency Gain" },
        ],
    },
];

pub const TRUSTED_COMPANIES: &[&str] = &[
    "TechFlow",
    "Growth Dynamics",
    "InnovateHub",
    "ScaleUp Solutions",
    "NextGen Corp",
];

pub const FAQS: &[Faq] = &[
    Faq {
        id: "getting-started",
        question: "How quickly can we get started with RecruitPro AI?",
        answer: "You can be up and running within 24 hours. Our onboarding team will help you configure your account, import existing job requirements, and train the AI on your specific hiring criteria. Most clients see their first AI-matched candidates within the first week.",
    },
    Faq {
        id: "integration",
        question: "Does RecruitPro AI integrate with our existing HR systems?",
        answer: "Yes, we offer seamless integrations with 50+ popular HR tools including Workday, BambooHR, Greenhouse, Lever, and many more. Our API-first architecture ensures smooth data flow and we provide dedicated support for custom integrations.",
    },
    Faq {
        id: "accuracy",
        question: "How accurate is the AI matching technology?",
        answer: "Our AI matching engine achieves 95% accuracy in candidate-job fit predictions. The system continuously learns from your hiring decisions and improves over time. We use advanced machine learning algorithms trained on millions of successful placements across various industries.",
    },
    Faq {
        id: "data-security",
        question: "How secure is our candidate and company data?",
        answer: "Security is our top priority. We're SOC 2 Type II certified, GDPR compliant, and use enterprise-grade encryption for all data. Your data is stored in secure, geographically distributed data centers with 24/7 monitoring and regular security audits.",
    },
    Faq {
        id: "pricing",
        question: "What are the pricing options and is there a free trial?",
        answer: "We offer flexible pricing based on your hiring volume and feature requirements. Plans start at $199/month for small teams, with enterprise solutions available. Yes, we provide a 14-day free trial with full access to all features and dedicated support.",
    },
    Faq {
        id: "candidate-experience",
        question: "How does this improve the candidate experience?",
        answer: "Candidates benefit from faster response times, more relevant job matches, and transparent communication throughout the process. Our platform reduces application-to-interview time by 60% and provides candidates with real-time status updates and feedback.",
    },
    Faq {
        id: "bias-reduction",
        question: "How does RecruitPro AI help reduce hiring bias?",
        answer: "Our AI is specifically designed to minimize unconscious bias by focusing on skills, experience, and job-relevant criteria rather than demographic factors. We regularly audit our algorithms for fairness and provide bias detection reports to help you build more diverse teams.",
    },
    Faq {
        id: "support",
        question: "What kind of support and training do you provide?",
        answer: "We provide comprehensive onboarding, live training sessions, detailed documentation, and 24/7 customer support. Each client gets a dedicated success manager, and we offer regular webinars and best practice sessions to maximize your platform usage.",
    },
];

pub const CTA_BENEFITS: &[&str] = &[
    "14-day free trial",
    "No setup fees",
    "Full feature access",
    "Dedicated support",
    "Cancel anytime",
];

pub const TRUST_INDICATORS: &[Stat] = &[
    Stat { value: "95%", label: "Match Accuracy" },
    Stat { value: "60%", label: "Time Reduction" },
    Stat { value: "500+", label: "Happy Customers" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let feature_ids: HashSet<_> = FEATURES.iter().map(|f| f.id).collect();
        assert_eq!(feature_ids.len(), FEATURES.len());
        let faq_ids: HashSet<_> = FAQS.iter().map(|f| f.id).collect();
        assert_eq!(faq_ids.len(), FAQS.len());
    }

    #[test]
    fn test_steps_numbered_in_order() {
        let numbers: Vec<u8> = STEPS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
