use super::lines;
use crate::models::{
    DeliveryFormat, Diagnosis, DisorderRecord, NO_LINK, Resource, ResourceType, Screening,
    ScreeningTool, SeverityContent, Treatment,
};

const SAMHSA_HELPLINE: &str = "https://www.samhsa.gov/find-help/national-helpline";

pub(super) fn record() -> DisorderRecord {
    DisorderRecord {
        title: "Substance Use Disorder".to_string(),
        screening: Screening {
            title: "How to Screen for Substance Use Disorder".to_string(),
            content: lines(&[
                "Use validated screening tools such as CAGE-AID, AUDIT (alcohol), DAST-10 (drugs), or NIDA Quick Screen.",
                "Screen for frequency and quantity of substance use across all categories (alcohol, opioids, stimulants, cannabis, etc.).",
                "Assess for loss of control, tolerance, withdrawal symptoms, and continued use despite negative consequences.",
                "Inquire about impact on work, relationships, health, and legal issues.",
                "Screen for risky behaviors: driving under influence, needle sharing, unsafe sexual practices.",
                "Evaluate co-occurring mental health disorders (depression, anxiety, PTSD).",
                "Assess motivation and readiness for change using motivational interviewing techniques.",
            ]),
            tools: vec![
                ScreeningTool::new("CAGE-AID", SAMHSA_HELPLINE),
                ScreeningTool::new("AUDIT", SAMHSA_HELPLINE),
                ScreeningTool::new("DAST-10", SAMHSA_HELPLINE),
                ScreeningTool::new("NIDA Quick Screen", SAMHSA_HELPLINE),
            ],
        },
        diagnosis: Diagnosis {
            title: "How to Diagnose Substance Use Disorder".to_string(),
            content: lines(&[
                "Substance Use Disorder requires ≥2 criteria within 12-month period per DSM-5-TR.",
                "Criteria include: tolerance, withdrawal, using larger amounts/longer periods, unsuccessful efforts to cut down, excessive time spent obtaining/using/recovering, giving up activities, continued use despite problems.",
                "Additional criteria: craving, failure to fulfill obligations, use in hazardous situations, social/interpersonal problems, physical/psychological problems.",
                "Assess severity: Mild (2-3 criteria), Moderate (4-5 criteria), Severe (≥6 criteria).",
                "Identify specific substance(s) involved and evaluate polysubstance use.",
                "Conduct toxicology screening when indicated.",
                "Assess for medical complications and withdrawal risk.",
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
        description: "Mild Substance Use Disorder (2-3 criteria) may respond to brief interventions and outpatient counseling. Focus on motivational enhancement and harm reduction strategies.".to_string(),
        psychotherapy: lines(&[
            "Motivational Interviewing (MI) - Enhance intrinsic motivation to change",
            "Brief Interventions - Short counseling sessions focused on reducing use",
            "Cognitive Behavioral Therapy (CBT) - Identify triggers and develop coping skills",
            "Harm Reduction Counseling - Minimize risks associated with continued use",
            "Contingency Management - Positive reinforcement for abstinence",
        ]),
        lifestyle: Vec::new(),
        resources: vec![
            Resource::public(
                "SAMHSA National Helpline",
                "24/7 free treatment referral service: 1-800-662-HELP (4357)",
                SAMHSA_HELPLINE,
            ),
            Resource::public(
                "Alcoholics Anonymous (AA)",
                "Free peer support groups worldwide using 12-step model.",
                "https://www.aa.org",
            ),
            Resource::public(
                "Narcotics Anonymous (NA)",
                "Free peer support for individuals recovering from drug addiction.",
                "https://www.na.org",
            ),
            Resource::public(
                "SMART Recovery",
                "Self-empowerment addiction recovery support groups using science-based approach.",
                "https://www.smartrecovery.org",
            ),
            Resource::private(
                "Outpatient Addiction Counseling",
                "Individual or group counseling 1-2 times per week.",
                NO_LINK,
            )
            .with_cost("$50-150/session, many accept insurance")
            .with_format(DeliveryFormat::Both)
            .with_considerations("Sliding scale often available"),
        ],
    }
}

fn moderate() -> SeverityContent {
    SeverityContent {
        description: "Moderate Substance Use Disorder (4-5 criteria) typically requires intensive outpatient treatment with possible medication-assisted treatment (MAT). Regular monitoring and comprehensive support are essential.".to_string(),
        psychotherapy: lines(&[
            "Cognitive Behavioral Therapy (CBT) - Evidence-based addiction treatment",
            "Motivational Enhancement Therapy (MET) - Build motivation for sustained change",
            "Contingency Management - Vouchers/rewards for maintaining abstinence",
            "Group Therapy - Peer support and skill development",
            "Family Therapy - Address family dynamics and build support system",
        ]),
        lifestyle: Vec::new(),
        resources: vec![
            Resource::public(
                "SAMHSA Treatment Locator",
                "Find substance use treatment facilities nationwide.",
                "https://findtreatment.samhsa.gov",
            ),
            Resource::private(
                "Intensive Outpatient Programs (IOP)",
                "Structured treatment 3-5 days/week, 3 hours/day including group and individual therapy.",
                NO_LINK,
            )
            .with_cost("$250-400/day, often covered by insurance")
            .with_format(DeliveryFormat::Both)
            .with_considerations("Allows continued work/school attendance"),
            Resource::new(
                "Medication-Assisted Treatment (MAT) Clinics",
                "Combines medications (methadone, buprenorphine, naltrexone) with counseling.",
                NO_LINK,
                ResourceType::Both,
            )
            .with_cost("Varies, many accept Medicaid")
            .with_format(DeliveryFormat::Both)
            .with_considerations("Evidence-based for opioid use disorder"),
            Resource::private(
                "Recovery Housing/Sober Living",
                "Supportive living environment with accountability and structure.",
                NO_LINK,
            )
            .with_cost("$500-1500/month")
            .with_format(DeliveryFormat::InPerson)
            .with_considerations("Drug-free living space, varies in structure"),
        ],
    }
}

fn severe() -> SeverityContent {
    SeverityContent {
        description: "Severe Substance Use Disorder (≥6 criteria) requires intensive treatment, often beginning with medical detoxification. Consider residential treatment and comprehensive aftercare planning. High risk for medical complications and withdrawal.".to_string(),
        psychotherapy: lines(&[
            "Residential Treatment - Comprehensive 24/7 structured treatment",
            "Intensive Cognitive Behavioral Therapy (CBT) - Daily individual and group sessions",
            "Dialectical Behavior Therapy (DBT) - For co-occurring emotional dysregulation",
            "Trauma-Focused Therapy - Address underlying trauma contributing to use",
            "Relapse Prevention Training - Develop comprehensive recovery plan",
        ]),
        lifestyle: Vec::new(),
        resources: vec![
            Resource::new(
                "Medical Detoxification",
                "24/7 medical monitoring during withdrawal, inpatient or outpatient.",
                NO_LINK,
                ResourceType::Both,
            )
            .with_cost("Often covered by insurance, varies widely")
            .with_format(DeliveryFormat::InPerson)
            .with_considerations("Essential for alcohol and benzodiazepine withdrawal"),
            Resource::private(
                "Residential Treatment Centers",
                "30-90 day programs with 24/7 care, therapy, and medical supervision.",
                NO_LINK,
            )
            .with_cost("$5,000-80,000/month, insurance may cover")
            .with_format(DeliveryFormat::InPerson)
            .with_considerations("Varying levels of amenities and evidence-based practices"),
            Resource::private(
                "Partial Hospitalization Programs (PHP)",
                "Day treatment 5-7 days/week, returning home at night.",
                NO_LINK,
            )
            .with_cost("Typically covered by insurance")
            .with_format(DeliveryFormat::InPerson)
            .with_considerations("Step-down from residential or detox"),
            Resource::public(
                "988 Suicide & Crisis Lifeline",
                "Crisis support including substance use crises.",
                "https://988lifeline.org",
            ),
            Resource::public(
                "Peer Recovery Support Services",
                "Certified peer specialists provide ongoing support and mentorship.",
                NO_LINK,
            ),
        ],
    }
}
