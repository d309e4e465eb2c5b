use super::lines;
use crate::models::{
    DeliveryFormat, Diagnosis, DisorderRecord, NO_LINK, Resource, Screening, ScreeningTool,
    SeverityContent, Treatment,
};

pub(super) fn record() -> DisorderRecord {
    DisorderRecord {
        title: "Depression".to_string(),
        screening: Screening {
            title: "How to Screen for Depression".to_string(),
            content: lines(&[
                "Use standardized screening tools such as PHQ-9 (Patient Health Questionnaire-9) or PHQ-2 for initial assessment.",
                "Screen for depressive symptoms including persistent sadness, loss of interest or pleasure, changes in appetite or sleep, fatigue, and difficulty concentrating.",
                "Assess for duration and severity of symptoms (symptoms present for at least 2 weeks).",
                "Inquire about functional impairment in work, social relationships, and daily activities.",
                "Screen for suicidal ideation or self-harm thoughts.",
                "Consider comorbidities such as anxiety, substance use, or chronic medical conditions.",
            ]),
            tools: vec![
                ScreeningTool::new("PHQ-9", "https://www.phqscreeners.com/phq9"),
                ScreeningTool::new("PHQ-2", "https://www.phqscreeners.com/phq2"),
            ],
        },
        diagnosis: Diagnosis {
            title: "How to Diagnose Depression".to_string(),
            content: lines(&[
                "Major Depressive Disorder requires ≥5 symptoms present for at least 2 weeks, including either depressed mood or loss of interest/pleasure.",
                "Additional criteria include: significant weight change, insomnia or hypersomnia, psychomotor agitation or retardation, fatigue, feelings of worthlessness or guilt, diminished concentration, and recurrent thoughts of death.",
                "Use DSM-5-TR criteria for formal diagnosis.",
                "Rule out other medical causes (thyroid dysfunction, vitamin deficiencies, neurological conditions).",
                "Differentiate from bipolar disorder, persistent depressive disorder, and adjustment disorders.",
                "Assess severity using PHQ-9 scores: 5-9 (mild), 10-14 (moderate), 15-19 (moderately severe), 20+ (severe).",
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
        description: "Mild depression (PHQ-9 score 5-9) often responds well to supportive interventions and lifestyle modifications. Monitor symptoms closely and consider escalating treatment if no improvement in 6-8 weeks.".to_string(),
        psychotherapy: lines(&[
            "Cognitive Behavioral Therapy (CBT) - Focus on identifying and changing negative thought patterns",
            "Behavioral Activation - Increase engagement in pleasurable and meaningful activities",
            "Problem-Solving Therapy - Develop coping strategies for specific stressors",
            "Mindfulness-Based Cognitive Therapy - Combines mindfulness practices with CBT techniques",
            "Interpersonal Therapy (IPT) - Address relationship issues contributing to depression",
        ]),
        lifestyle: lines(&[
            "Regular physical activity",
            "Balanced diet",
            "Adequate sleep",
            "Social support",
        ]),
        resources: vec![
            Resource::public(
                "SAMHSA National Helpline",
                "Free, confidential, 24/7 treatment referral and information service for individuals and families facing mental health disorders.",
                "https://www.samhsa.gov/find-help/national-helpline",
            ),
            Resource::public(
                "NAMI HelpLine",
                "Information, resource referrals, and support offered by highly trained volunteers.",
                "https://www.nami.org/help",
            ),
            Resource::private(
                "BetterHelp Online Therapy",
                "Professional online counseling with licensed therapists via messaging, phone, or video.",
                "https://www.betterhelp.com",
            )
            .with_cost("$60-90/week")
            .with_format(DeliveryFormat::Virtual)
            .with_considerations("Requires internet access, not for crisis situations"),
            Resource::private(
                "Talkspace",
                "Online therapy platform connecting patients with licensed therapists.",
                "https://www.talkspace.com",
            )
            .with_cost("$69-109/week")
            .with_format(DeliveryFormat::Virtual)
            .with_considerations("Insurance accepted for some plans"),
            Resource::public(
                "Local Community Mental Health Centers",
                "Sliding scale fees based on income, often accept Medicaid.",
                NO_LINK,
            ),
        ],
    }
}

fn moderate() -> SeverityContent {
    SeverityContent {
        description: "Moderate depression (PHQ-9 score 10-14) typically requires a combination of psychotherapy and consideration of pharmacotherapy. Regular monitoring and follow-up are essential.".to_string(),
        psychotherapy: lines(&[
            "Cognitive Behavioral Therapy (CBT) - Evidence-based first-line treatment",
            "Interpersonal Therapy (IPT) - Focus on relationship patterns and life transitions",
            "Behavioral Activation - Structured approach to increasing positive activities",
            "Acceptance and Commitment Therapy (ACT) - Focus on psychological flexibility",
            "Psychodynamic Therapy - Explore unconscious patterns and past experiences",
        ]),
        lifestyle: Vec::new(),
        resources: vec![
            Resource::public(
                "SAMHSA Treatment Locator",
                "Find mental health treatment facilities and programs across the United States.",
                "https://findtreatment.samhsa.gov",
            ),
            Resource::private(
                "Psychology Today Therapist Directory",
                "Search for therapists by location, insurance, and specialty.",
                "https://www.psychologytoday.com/us/therapists",
            )
            .with_cost("Varies by provider ($100-250/session typical)")
            .with_format(DeliveryFormat::Both)
            .with_considerations("Many accept insurance, verify coverage"),
            Resource::private(
                "Local Psychiatric Practices",
                "Comprehensive treatment including medication management and therapy.",
                NO_LINK,
            )
            .with_cost("$150-300 initial consult, $75-150 follow-ups")
            .with_format(DeliveryFormat::Both)
            .with_considerations("Check insurance network participation"),
            Resource::public(
                "Employee Assistance Programs (EAP)",
                "Free, confidential counseling sessions offered through many employers.",
                NO_LINK,
            ),
        ],
    }
}

fn severe() -> SeverityContent {
    SeverityContent {
        description: "Severe depression (PHQ-9 score ≥15) requires intensive treatment including pharmacotherapy and psychotherapy. Consider psychiatric referral and assess for hospitalization if patient is a danger to self or others.".to_string(),
        psychotherapy: lines(&[
            "Cognitive Behavioral Therapy (CBT) - Combined with medication management",
            "Dialectical Behavior Therapy (DBT) - For patients with self-harm behaviors",
            "Intensive Outpatient Programs (IOP) - Structured group and individual therapy",
            "Electroconvulsive Therapy (ECT) consultation - For treatment-resistant cases",
            "Transcranial Magnetic Stimulation (TMS) - Non-invasive brain stimulation",
        ]),
        lifestyle: Vec::new(),
        resources: vec![
            Resource::public(
                "988 Suicide & Crisis Lifeline",
                "Free, 24/7 support for people in distress, prevention and crisis resources.",
                "https://988lifeline.org",
            ),
            Resource::public(
                "Crisis Text Line",
                "Text HOME to 741741 for free, 24/7 crisis support.",
                "https://www.crisistextline.org",
            ),
            Resource::public(
                "Psychiatric Emergency Services",
                "Hospital-based emergency psychiatric evaluation and stabilization.",
                NO_LINK,
            ),
            Resource::private(
                "Intensive Outpatient Programs (IOP)",
                "Structured treatment 3-5 days/week, several hours per day.",
                NO_LINK,
            )
            .with_cost("$300-500/day, often covered by insurance")
            .with_format(DeliveryFormat::Both)
            .with_considerations("Requires significant time commitment"),
            Resource::private(
                "Partial Hospitalization Programs (PHP)",
                "Day treatment program providing intensive psychiatric care.",
                NO_LINK,
            )
            .with_cost("Typically covered by insurance")
            .with_format(DeliveryFormat::InPerson)
            .with_considerations("Step-down from inpatient care"),
        ],
    }
}
