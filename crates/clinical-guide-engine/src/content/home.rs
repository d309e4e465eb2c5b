use super::lines;
use crate::models::{
    Accent, DeliveryFormat, DisorderCard, DisorderId, Hero, HomeContent, Notice, Resource,
    TherapyExplainer,
};

pub(super) fn content() -> HomeContent {
    HomeContent {
        hero: Hero {
            title: "Mental Health Clinical Guide for Primary Care".to_string(),
            tagline: "A resource for screening, diagnosis and the development of non-pharmacological treatment plans for common mental health presentations.".to_string(),
            audience: "A free clinical reference tool for primary care physicians in the Annapolis Valley, Nova Scotia".to_string(),
        },
        disorder_cards: vec![
            DisorderCard {
                id: DisorderId::Depression,
                heading: "Depression".to_string(),
                summary: "Clinical guidance for screening, diagnosing, and treating depressive disorders across mild, moderate, and severe presentations.".to_string(),
                accent: Accent::Blue,
            },
            DisorderCard {
                id: DisorderId::Anxiety,
                heading: "Anxiety".to_string(),
                summary: "Evidence-based approaches to screening, diagnosis, and treatment of anxiety disorders including GAD, panic, and social anxiety.".to_string(),
                accent: Accent::Green,
            },
            DisorderCard {
                id: DisorderId::SubstanceUse,
                heading: "Substance Use Disorder".to_string(),
                summary: "Comprehensive assessment and treatment protocols for substance use disorders with severity-based interventions.".to_string(),
                accent: Accent::Purple,
            },
        ],
        therapies_heading: "Types of Psychotherapies Explained".to_string(),
        therapies: therapies(),
        regional_heading: "Options in the Annapolis Valley:".to_string(),
        regional_resources: regional_resources(),
        disclaimer: Notice {
            title: "Professional Use Only".to_string(),
            body: "This resource is designed for licensed healthcare professionals. Information provided should supplement, not replace, clinical judgment and current treatment guidelines. Always consider individual patient circumstances, comorbidities, and contraindications. For patients in crisis or with suicidal ideation, immediate psychiatric evaluation and appropriate interventions are required. Call Crisis Line Nova Scotia: 1-888-429-8167 or 988 Suicide & Crisis Lifeline.".to_string(),
        },
        footer: lines(&[
            "This is a free, open-source clinical reference tool designed for primary care physicians in the Annapolis Valley.",
            "Based on CANMAT 2023 Guidelines and current evidence-based research.",
        ]),
    }
}

pub(super) fn disorder_notice() -> Notice {
    Notice {
        title: "Important Notice".to_string(),
        body: "This information is intended for healthcare professionals and should not replace clinical judgment. Always consider individual patient circumstances, comorbidities, and consult current treatment guidelines. If a patient is in crisis or expresses suicidal ideation, immediate psychiatric evaluation and safety planning are essential.".to_string(),
    }
}

fn therapy(name: &str, paragraphs: &[&str], read_more: Option<&str>) -> TherapyExplainer {
    TherapyExplainer {
        name: name.to_string(),
        paragraphs: lines(paragraphs),
        read_more: read_more.map(str::to_string),
    }
}

fn therapies() -> Vec<TherapyExplainer> {
    vec![
        therapy(
            "Cognitive Behavioural Therapy:",
            &[
                "Cognitive Behavioural Therapy (CBT) is a structured, evidence-based psychotherapy that focuses on identifying and modifying unhelpful patterns of thinking and behaviour. Typically delivered over 6-20 sessions, CBT treatment typically focuses on helping individuals change unhelpful patterns of thinking that contribute to emotional distress. This therapy is based on proactive, shared therapeutic relationship between individual and therapist. Common strategies include learning to recognize and challenge cognitive distortions that create problems and reevaluating these thoughts considering evidence and reality. CBT also helps individuals develop a better understanding of the behavior and motivations of others, use structured problem-solving skills to manage difficult situations more effectively, and build a stronger sense of confidence in their own abilities and coping skills.",
                "CBT treatment also commonly involves efforts to change unhelpful behavioral patterns that maintain distress. These strategies may include gradually facing feared situations rather than avoiding them, using role-playing exercises to prepare for challenging or potentially problematic interactions with others, and learning techniques to calm the mind and relax the body, such as breathing exercises or relaxation skills.",
                "CBT emphasizes the here-and-now rather than exploring the past. While a certain amount of information about one's history is needed, the focus is on moving forward to develop more effective ways of coping with life.",
                "A key feature of CBT is its emphasis on practice outside of therapy sessions. Clients are often encouraged to complete homework assignments, such as thought records or behavioural experiments, to reinforce skills learned in therapy and promote lasting change.",
            ],
            Some(
                "https://www.camh.ca/en/health-info/mental-illness-and-addiction-index/cognitive-behavioural-therapy",
            ),
        ),
        therapy(
            "Interpersonal Therapy:",
            &[
                "Interpersonal Therapy (IPT) is a time-limited, evidence-based psychotherapy that focuses on improving mental health by addressing difficulties in a person's current interpersonal relationships and social functioning. IPT is based on the idea that psychological symptoms occur within a social context and are closely linked to problems in relationships, life roles, and significant life changes. Rather than emphasizing early childhood experiences or cognitive restructuring, IPT concentrates on present-day relationships and how interpersonal stressors contribute to emotional distress.",
                "Treatment is typically delivered over 12–16 structured sessions and focuses on one or two interpersonal problem areas: grief (complicated bereavement), role transitions (e.g., becoming a parent, retirement, or illness), role disputes (ongoing conflict with a partner, family member, or colleague), and interpersonal deficits (social isolation or difficulty forming relationships). Early sessions involve collaboratively linking mood symptoms to interpersonal difficulties and selecting a focus area. Middle sessions emphasize practical strategies such as communication analysis, role-playing difficult conversations, clarification of expectations, and encouraging emotional expression. The final phase consolidates progress and helps the client apply new interpersonal skills to future challenges.",
                "For example, a client presenting with depression following a recent job loss may identify a role transition as the primary focus of IPT. Therapy would explore how the loss has affected the client's identity, relationships, and sense of self-worth, as well as increased tension with family members. The therapist might help the client analyze a recent conflict with their partner, practice expressing feelings of shame or frustration more clearly, and develop strategies to seek support rather than withdraw. As interpersonal functioning improves and social support increases, depressive symptoms often decrease, illustrating the central IPT principle that improving relationships can directly improve mental health.",
            ],
            Some(
                "https://www.camh.ca/en/health-info/mental-illness-and-addiction-index/interpersonal-psychotherapy",
            ),
        ),
        therapy(
            "Behavioural Activation Therapy:",
            &[
                "Behavioural Activation Therapy (BAT) is an evidence-based psychotherapy based on the understanding that low mood is maintained by avoidance, withdrawal, and reduced engagement in meaningful activities. Rather than focusing on changing thoughts, BAT emphasizes helping individuals gradually re-engage in activities that provide pleasure, a sense of accomplishment, or personal meaning, even when motivation is low. Therapy involves monitoring the relationship between activities and mood, identifying personal values, and collaboratively scheduling realistic, values-based actions to increase positive reinforcement from the environment. For example, a person with depression who has stopped socializing and exercising may work with their therapist to schedule short daily walks and brief check-ins with a friend; although these activities initially feel effortful, consistent engagement can lead to improved mood, increased energy, and reduced avoidance over time.",
            ],
            None,
        ),
        therapy(
            "Mindfulness Based Cognitive Behavioural Therapy:",
            &[
                "Mindfulness-based cognitive behavioral therapy (MB-CBT) is an evidence-based psychotherapy which integrates traditional cognitive behavioral strategies with mindfulness practices to help individuals develop greater awareness of their thoughts, emotions, and bodily sensations in the present moment. Rather than focusing solely on changing the content of negative thoughts, MB-CBT emphasizes altering an individual's relationship to those thoughts through nonjudgmental observation and acceptance. Core techniques include mindfulness meditation, body scanning, and mindful movement alongside cognitive restructuring and behavioral activation. By cultivating attentional control and self-compassion, mindfulness-based CBT supports patients in responding more adaptively to distressing experiences rather than reacting automatically or avoidantly.",
            ],
            None,
        ),
        therapy(
            "Activation and Commitment Therapy:",
            &[
                "Acceptance and Commitment Therapy (ACT) is a behavioral therapy that helps individuals improve psychological flexibility by changing their relationship with difficult thoughts and emotions rather than trying to eliminate them. ACT teaches people to notice internal experiences such as anxiety, sadness, or cravings without judgment or avoidance, while committing to behaviors that align with their personal values. Core processes of ACT include acceptance, cognitive defusion (stepping back from unhelpful thoughts), present-moment awareness, self-as-context, values clarification, and committed action. By focusing on what matters most to the individual and encouraging meaningful action even in the presence of distress, ACT supports long-term well-being.",
            ],
            None,
        ),
        therapy(
            "Motivational Interviewing:",
            &[
                "Motivational interviewing (MI) is a collaborative, person-centred, evidence-based counselling approach that aims to strengthen a person's own motivation and commitment to change by exploring and resolving ambivalence in a respectful, non-judgmental way. Rather than confronting or directing, the clinician uses empathy, reflective listening, and open-ended questions to elicit the individual's values, goals, and intrinsic reasons for change (\"change talk\"), while affirming autonomy and readiness. For example, a clinician might say: \"On the one hand, drinking helps you relax after work, and on the other, you've noticed it's affecting your sleep and blood pressure—how do you see those fitting together?\" This approach helps patients articulate their own reasons for change, which is associated with improved engagement and outcomes across substance use disorders.",
            ],
            None,
        ),
        therapy(
            "Contingency Management:",
            &[
                "Contingency management (CM) is an evidence-based behavioural treatment for substance use disorders that uses positive reinforcement to promote desired behaviours, most commonly abstinence or treatment adherence. Patients receive tangible rewards (such as vouchers, gift cards, or privileges) contingent on objective verification of behaviour change, like negative urine drug screens or attendance at appointments. Grounded in principles of operant conditioning, CM increases the immediate rewards of recovery to compete with the reinforcing effects of substances, and it has particularly strong evidence for stimulant use disorders, as well as growing support for opioids, alcohol, and cannabis when combined with other treatments.",
            ],
            None,
        ),
    ]
}

fn clinic(title: &str, description: &str, link: &str, format: DeliveryFormat, cost: &str) -> Resource {
    Resource::private(title, description, link)
        .with_format(format)
        .with_cost(cost)
}

fn regional_resources() -> Vec<Resource> {
    use DeliveryFormat::{Both, InPerson, Virtual};

    vec![
        Resource::public(
            "Nova Scotia Health Mental Health & Addictions",
            "Public Self-Referral System",
            "https://mha.nshealth.ca/en",
        )
        .with_format(InPerson)
        .with_cost("Free"),
        clinic(
            "Pivoted Perspective",
            "Offers in person or virtual options. Individual Sessions. CBT. Offers option to do walk and talk option.",
            "https://www.pivotedperspective.com/",
            Both,
            "$175.00 per session",
        ),
        clinic(
            "Breathe Mindfulness",
            "Offers in person or virtual options. Individual or group sessions. CBT. Mindfulness based CBT. ACT.",
            "https://breathemindfulness.ca/",
            Both,
            "$175.00-$225.00 per session",
        ),
        clinic(
            "Psychotherapy For You",
            "Virtual option only. Individual sessions. CBT. Mindfulness based CBT. ACT.",
            "https://www.psychotherapyforyou.ca/",
            Virtual,
            "$160 per session",
        ),
        clinic(
            "Sommerlund",
            "Offers in person or virtual options. Individual sessions. CBT. Mindfulness based CBT. ACT.",
            "https://www.sommerlund.ca/",
            Both,
            "$150 per session",
        ),
        clinic(
            "Annapolis Valley Psychological Services",
            "Offers in person or virtual options. Individual sessions. CBT. Mindfulness based CBT. ACT. Specialty in intimate partner violence.",
            "https://www.annapolisvalleypsychologicalservices.ca/our-team",
            Both,
            "Cost not available for sessions on website",
        ),
        clinic(
            "True North Psychological",
            "Offers in person or virtual options. Individual sessions. CBT. Mindfulness based CBT. ACT. IPT.",
            "https://truenorthpsychological.com/",
            Both,
            "Cost not available on website",
        ),
        clinic(
            "Amy Rubin",
            "Offers in person or virtual options. Individual Sessions. CBT-based approach but does not report specific CBT therapy.",
            "http://amyrubin.ca/",
            Both,
            "$140 per session",
        ),
        clinic(
            "Resolve CT",
            "Offers in person or virtual options. Individual Sessions. Does not explicitly state CBT but practitioners trained in CBT.",
            "https://resolvect.ca/services",
            Both,
            "$125 per session",
        ),
        clinic(
            "Bower Jacquard Psychological Services",
            "Offers in person or virtual options. Individual or group sessions. CBT. ACT.",
            "https://bowerjacquardpsychologicalservices.com/services/#therapy",
            Both,
            "Cost not available on website",
        ),
        clinic(
            "Valley Inner Space",
            "Offers in person sessions. Individual sessions. Does not explicitly state CBT but practitioners trained in CBT.",
            "https://www.valleyinnerspace.ca/",
            InPerson,
            "Cost not available on website",
        ),
        clinic(
            "Inner Path Psychology",
            "Offers in person or virtual options. Individual sessions. CBT.",
            "https://innerpathpsychology.com/services/",
            Both,
            "$225 per session",
        ),
        clinic(
            "Scotia Psychological Services",
            "Virtual option only. Individual sessions. CBT. Has consultation services for practitioners interested in providing CBT therapy.",
            "https://www.scotiapsychologicalservices.com/",
            Virtual,
            "$180-$225 per session",
        ),
        clinic(
            "Therapy by Katherine",
            "Virtual option only. Individual sessions. Reports using CBT, ACT and motivational interviewing in conjunction but mostly narrative therapy.",
            "https://www.therapybykatherine.ca/",
            Virtual,
            "Cost not available on website",
        ),
        clinic(
            "Jenn Smith Counselling",
            "In person or Virtual options. Individual sessions. Uses techniques from CBT.",
            "https://www.jennsmithcounselling.com/",
            Both,
            "$160 per session",
        ),
    ]
}
