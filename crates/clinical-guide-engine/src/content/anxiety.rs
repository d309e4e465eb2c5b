use super::lines;
use crate::models::{
    DeliveryFormat, Diagnosis, DisorderRecord, NO_LINK, Resource, Screening, ScreeningTool,
    SeverityContent, Treatment,
};

pub(super) fn record() -> DisorderRecord {
    DisorderRecord {
        title: "Anxiety".to_string(),
        screening: Screening {
            title: "How to Screen for Anxiety".to_string(),
            content: lines(&[
                "Use standardized tools such as GAD-7 (Generalized Anxiety Disorder-7) for initial screening.",
                "Screen for excessive worry, restlessness, difficulty concentrating, irritability, muscle tension, and sleep disturbance.",
                "Assess duration (symptoms present for at least 6 months for GAD) and severity.",
                "Inquire about panic attacks: sudden onset of intense fear with physical symptoms.",
                "Screen for avoidance behaviors and social anxiety symptoms.",
                "Evaluate functional impairment in work, relationships, and daily activities.",
                "Consider comorbid depression, substance use, and medical conditions.",
            ]),
            tools: vec![ScreeningTool::new("GAD-7", "https://www.phqscreeners.com/gad7")],
        },
        diagnosis: Diagnosis {
            title: "How to Diagnose Anxiety".to_string(),
            content: lines(&[
                "Generalized Anxiety Disorder (GAD): Excessive worry about various events for ≥6 months, difficult to control, with ≥3 associated symptoms.",
                "Associated symptoms include restlessness, fatigue, difficulty concentrating, irritability, muscle tension, and sleep disturbance.",
                "Panic Disorder: Recurrent unexpected panic attacks with persistent concern about future attacks.",
                "Social Anxiety Disorder: Marked fear of social situations where scrutiny may occur.",
                "Use DSM-5-TR criteria for formal diagnosis and to differentiate anxiety disorder subtypes.",
                "Rule out medical causes (hyperthyroidism, cardiac conditions, respiratory disorders).",
                "Assess severity using GAD-7 scores: 5-9 (mild), 10-14 (moderate), 15-21 (severe).",
            ]),
        },
        treatment: Treatment {
            mild: mild(),
            moderate: moderate(),
            severe: severe(),
        },
    }
}

fn mild() -> SeverityContent {
    SeverityContent {
        description: "Mild anxiety (GAD-7 score 5-9) often responds to psychotherapy and self-management strategies. Monitor symptoms and reassess if no improvement in 6-8 weeks.".to_string(),
        psychotherapy: lines(&[
            "Cognitive Behavioral Therapy (CBT) - Identify and challenge anxious thoughts",
            "Exposure Therapy - Gradual exposure to feared situations",
            "Relaxation Training - Progressive muscle relaxation, deep breathing exercises",
            "Mindfulness-Based Stress Reduction (MBSR) - Mindfulness meditation practices",
            "Acceptance and Commitment Therapy (ACT) - Accept anxiety while pursuing valued actions",
        ]),
        lifestyle: lines(&[
            "Regular physical activity",
            "Balanced diet",
            "Adequate sleep",
            "Social support",
        ]),
        resources: vec![
            Resource::public(
                "Anxiety and Depression Association of America (ADAA)",
                "Free resources, support groups, and therapist directory.",
                "https://adaa.org",
            ),
            Resource::public(
                "NAMI Anxiety Disorders",
                "Educational resources and support for anxiety disorders.",
                "https://www.nami.org/anxiety-disorders",
            ),
            Resource::private(
                "Calm App",
                "Guided meditation, sleep stories, and anxiety management tools.",
                "https://www.calm.com",
            )
            .with_cost("$14.99/month or $69.99/year")
            .with_format(DeliveryFormat::Virtual)
            .with_considerations("Self-guided, not a replacement for therapy"),
            Resource::private(
                "Headspace",
                "Meditation and mindfulness app with anxiety-focused content.",
                "https://www.headspace.com",
            )
            .with_cost("$12.99/month or $69.99/year")
            .with_format(DeliveryFormat::Virtual)
            .with_considerations("Some content free, full access requires subscription"),
        ],
    }
}

fn moderate() -> SeverityContent {
    SeverityContent {
        description: "Moderate anxiety (GAD-7 score 10-14) typically requires psychotherapy with consideration of pharmacotherapy. Regular follow-up and symptom monitoring are important.".to_string(),
        psychotherapy: lines(&[
            "Cognitive Behavioral Therapy (CBT) - Evidence-based first-line treatment",
            "Exposure and Response Prevention (ERP) - For anxiety with avoidance",
            "Panic Control Therapy - Specific techniques for panic attacks",
            "Social Skills Training - For social anxiety disorder",
            "Biofeedback - Learn to control physiological responses to anxiety",
        ]),
        lifestyle: Vec::new(),
        resources: vec![
            Resource::public(
                "SAMHSA Treatment Locator",
                "Find mental health treatment facilities specializing in anxiety.",
                "https://findtreatment.samhsa.gov",
            ),
            Resource::private(
                "Anxiety Disorders Center",
                "Specialized treatment centers offering evidence-based therapies.",
                NO_LINK,
            )
            .with_cost("$125-200/session")
            .with_format(DeliveryFormat::Both)
            .with_considerations("Many centers offer virtual options"),
            Resource::private(
                "Group Therapy Programs",
                "Structured group CBT for anxiety, often more affordable than individual therapy.",
                NO_LINK,
            )
            .with_cost("$40-80/session")
            .with_format(DeliveryFormat::Both)
            .with_considerations("Check insurance coverage"),
            Resource::private(
                "NOCD (for OCD)",
                "Specialized online therapy for obsessive-compulsive disorder and anxiety.",
                "https://www.treatmyocd.com",
            )
            .with_cost("Varies, insurance accepted")
            .with_format(DeliveryFormat::Virtual)
            .with_considerations("Focuses on ERP therapy"),
        ],
    }
}

fn severe() -> SeverityContent {
    SeverityContent {
        description: "Severe anxiety (GAD-7 score ≥15) requires intensive treatment with both pharmacotherapy and psychotherapy. Consider psychiatric referral and higher level of care if functioning is significantly impaired.".to_string(),
        psychotherapy: lines(&[
            "Intensive Cognitive Behavioral Therapy (CBT) - Multiple sessions per week",
            "Intensive Exposure Therapy - Focused, accelerated exposure treatment",
            "Dialectical Behavior Therapy (DBT) - For anxiety with emotional dysregulation",
            "Intensive Outpatient Programs (IOP) - Structured daily treatment",
            "Residential Treatment - For severe, treatment-resistant cases",
        ]),
        lifestyle: Vec::new(),
        resources: vec![
            Resource::public(
                "988 Suicide & Crisis Lifeline",
                "Support for anxiety-related crisis situations.",
                "https://988lifeline.org",
            ),
            Resource::public(
                "Crisis Text Line",
                "Text HOME to 741741 for crisis support.",
                "https://www.crisistextline.org",
            ),
            Resource::private(
                "Intensive Outpatient Programs (IOP)",
                "Structured anxiety treatment 3-5 days/week.",
                NO_LINK,
            )
            .with_cost("$300-500/day, often covered by insurance")
            .with_format(DeliveryFormat::Both)
            .with_considerations("Requires time commitment but allows living at home"),
            Resource::private(
                "Residential Anxiety Treatment",
                "24/7 structured treatment in residential setting for severe anxiety.",
                NO_LINK,
            )
            .with_cost("Varies widely, insurance may cover")
            .with_format(DeliveryFormat::InPerson)
            .with_considerations("For treatment-resistant or severely impairing anxiety"),
            Resource::public(
                "Psychiatric Hospitalization",
                "Inpatient care for acute anxiety crisis with safety concerns.",
                NO_LINK,
            ),
        ],
    }
}
