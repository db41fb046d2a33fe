//! Static illustrative content
//!
//! Everything shown by the interactive renderers that is not derived from a
//! control lives here as plain data. None of it is measured live.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub sub: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flow {
    pub title: &'static str,
    pub steps: &'static [FlowStep],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableData {
    pub title: &'static str,
    pub headers: &'static [&'static str],
    pub rows: &'static [&'static [&'static str]],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackDefense {
    pub attack: &'static str,
    pub defense: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub name: &'static str,
    pub description: &'static str,
    pub binary: f64,
    pub multi: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecRow {
    pub key: &'static str,
    pub value: &'static str,
}

pub const INTRO_BULLETS: [&str; 4] = [
    "Wi-Fi is critical infrastructure (homes, campuses, hospitals, factories).",
    "Attacks are cheap & automated: deauth, evil twin, rogue AP.",
    "Rule-based IDS misses novel or obfuscated attacks.",
    "We need adaptive, intelligent, real-time defense at the edge.",
];

pub const INTRO_STATS: [Stat; 3] = [
    Stat {
        label: "Devices / home",
        value: "~25",
        sub: "",
    },
    Stat {
        label: "Wi-Fi probes/day (campus)",
        value: "1000s",
        sub: "",
    },
    Stat {
        label: "Attack kit cost",
        value: "< $50",
        sub: "",
    },
];

pub const ATTACK_SURFACE: [&str; 6] = [
    "Deauth",
    "Evil Twin",
    "Rogue AP",
    "KRACK",
    "Re-Assoc",
    "SSDP/DoS",
];

pub const PROBLEM_IMPACTS: [Card; 3] = [
    Card {
        title: "Availability",
        body: "Service disruption, disconnections, DoS.",
    },
    Card {
        title: "Confidentiality",
        body: "Data theft via rogue AP / man-in-the-middle.",
    },
    Card {
        title: "Integrity",
        body: "Session hijack, malicious config changes.",
    },
];

pub const RULE_BASED_GAPS: [&str; 4] = [
    "Evasive attacks mutate packet patterns and bypass hand-crafted rules.",
    "High false positives in busy environments → alert fatigue for admins.",
    "Rules are brittle & expensive to maintain across vendors and firmware.",
    "No learning of \"normal\" behavior → poor detection of novel attacks.",
];

pub const PROBLEM_TAKEAWAY: &str =
    "We need an adaptive, ML-driven IPS that runs on-device and detects anomalies in sub-second.";

pub const DEFENSE_FLOW: Flow = Flow {
    title: "ML-Powered Defense Flow",
    steps: &[
        FlowStep {
            title: "Detection",
            description: "Binary & Multi-class ML models",
        },
        FlowStep {
            title: "Analysis",
            description: "100 attack packets/hour → prevention trigger",
        },
        FlowStep {
            title: "Defense",
            description: "Automated Block/Deauth response",
        },
    ],
};

pub const ARCHITECTURE_FLOW: Flow = Flow {
    title: "System Architecture Flow",
    steps: &[
        FlowStep {
            title: "Packet Capture",
            description: "Monitor mode adapter",
        },
        FlowStep {
            title: "Preprocessing",
            description: "Impute, scale, categorize",
        },
        FlowStep {
            title: "ML Models",
            description: "Binary + Multi-class detection",
        },
        FlowStep {
            title: "Defense Module",
            description: "Block/Deauth actions",
        },
    ],
};

pub const ROADMAP_FLOW: Flow = Flow {
    title: "Future Development Roadmap",
    steps: &[
        FlowStep {
            title: "Phase 1: Enhancement",
            description: "Advanced ML models & cloud integration",
        },
        FlowStep {
            title: "Phase 2: Expansion",
            description: "IoT device protection & enterprise features",
        },
        FlowStep {
            title: "Phase 3: Innovation",
            description: "AI-powered threat prediction & automation",
        },
    ],
};

pub const DATASET_TABLE: TableData = TableData {
    title: "Dataset Statistics",
    headers: &["Metric", "Value", "Description"],
    rows: &[
        &["Total Samples", "~50,000", "Balanced normal vs attack traffic"],
        &[
            "Attack Types",
            "6",
            "Deauth, Evil Twin, Rogue AP, KRACK, Re-Assoc, SSDP",
        ],
        &[
            "Features",
            "9",
            "Behavioral patterns (no MAC/SSID identifiers)",
        ],
        &["Environment", "Isolated", "Controlled router environment"],
        &["Format", "CSV", "Feature dumps for ML training"],
    ],
};

pub const FEATURE_IMPORTANCE_TABLE: TableData = TableData {
    title: "Feature Importance Analysis",
    headers: &[
        "Feature",
        "Binary Importance",
        "Multi-class Importance",
        "Description",
    ],
    rows: &[
        &["Packet Rate", "0.24", "0.19", "Frequency of packet transmission"],
        &["Signal Strength", "0.18", "0.22", "RSSI values and variations"],
        &["Channel Usage", "0.16", "0.15", "Channel hopping patterns"],
        &["Frame Types", "0.14", "0.18", "Distribution of frame types"],
        &["Timing Intervals", "0.12", "0.13", "Inter-packet timing patterns"],
        &["Sequence Numbers", "0.10", "0.08", "Sequence number patterns"],
        &["Frame Sizes", "0.06", "0.05", "Packet size distributions"],
    ],
};

pub const MODELS_TABLE: TableData = TableData {
    title: "Model Comparison",
    headers: &["Model", "Task", "Accuracy", "F1-Score", "Latency"],
    rows: &[
        &["LightGBM", "Binary Classification", "~98.5%", "~98.0%", "<1s"],
        &["LightGBM", "Multi-class Classification", "99.8%", "93.9%", "<1s"],
        &["Alternative", "Random Forest", "~95%", "~92%", "~2s"],
        &["Alternative", "Neural Network", "~97%", "~94%", "~3s"],
    ],
};

pub const IMPACT_TABLE: TableData = TableData {
    title: "Impact & Value Metrics",
    headers: &["Metric", "Current State", "With HawkShield", "Improvement"],
    rows: &[
        &["Detection Time", "Manual (~hours)", "Automated (<1s)", "99.9% faster"],
        &["False Positives", "High (~30%)", "Low (<2%)", "93% reduction"],
        &["Network Downtime", "Extended", "Minimal", "~95% reduction"],
        &["Security Coverage", "Partial", "Comprehensive", "6x attack types"],
        &["Response Time", "Delayed", "Real-time", "Immediate"],
    ],
};

pub const ETHICS_TABLE: TableData = TableData {
    title: "Compliance Measures",
    headers: &["Category", "Measure", "Implementation", "Compliance"],
    rows: &[
        &[
            "Privacy",
            "Data Anonymization",
            "MAC/SSID retained ≤ 7 days (auto-purged)",
            "✓ GDPR",
        ],
        &[
            "Transparency",
            "Open Source Components",
            "Public algorithms",
            "✓ IEEE",
        ],
        &[
            "Accountability",
            "Audit Trails",
            "All actions logged",
            "✓ SOC2",
        ],
        &[
            "Fairness",
            "Bias Prevention",
            "Balanced training data",
            "✓ AI Ethics",
        ],
        &[
            "Security",
            "Encrypted Communication",
            "End-to-end encryption",
            "✓ ISO 27001",
        ],
    ],
};

pub const ETHICS_PILLARS: [Card; 3] = [
    Card {
        title: "Privacy",
        body: "MAC/SSID kept up to 7 days for audit, then auto-purged. Payloads anonymized. GDPR.",
    },
    Card {
        title: "Transparency",
        body: "Open components and public algorithms, following IEEE standards.",
    },
    Card {
        title: "Security",
        body: "Encrypted communication end to end. Certified ISO 27001.",
    },
];

pub const PERFORMANCE_STATS: [Stat; 4] = [
    Stat {
        label: "Binary Accuracy",
        value: "~98.5%",
        sub: "",
    },
    Stat {
        label: "Multi-class Accuracy",
        value: "99.8%",
        sub: "",
    },
    Stat {
        label: "Macro F1-Score",
        value: "93.9%",
        sub: "",
    },
    Stat {
        label: "Detection Latency",
        value: "<1s",
        sub: "",
    },
];

pub const ROGUE_AP_NOTE: Card = Card {
    title: "Note on RogueAP Detection",
    body: "RogueAP shows lower F1-score (~0.70) due to limited training samples. Future work includes expanding this dataset for improved detection.",
};

pub const IMPACT_STATS: [Stat; 5] = [
    Stat {
        label: "Detection Time",
        value: "< 1s",
        sub: "Automated",
    },
    Stat {
        label: "False Positives",
        value: "< 2%",
        sub: "after tuning",
    },
    Stat {
        label: "Downtime",
        value: "Minimal",
        sub: "~95% reduction",
    },
    Stat {
        label: "Coverage",
        value: "6 types",
        sub: "attack classes",
    },
    Stat {
        label: "Response",
        value: "Real-time",
        sub: "on-device",
    },
];

pub const ATTACK_DEFENSE: [AttackDefense; 6] = [
    AttackDefense {
        attack: "Deauth Attack",
        defense: "Block Packets",
        description: "Disconnects clients → Block malicious packets",
    },
    AttackDefense {
        attack: "Evil Twin",
        defense: "Deauth Rogue AP",
        description: "Fake access point → Deauth the imposter",
    },
    AttackDefense {
        attack: "Rogue AP",
        defense: "Deauth Unauthorized",
        description: "Unauthorized AP → Deauth rogue device",
    },
    AttackDefense {
        attack: "KRACK",
        defense: "Block Exploit",
        description: "Key reinstallation → Block exploit packets",
    },
    AttackDefense {
        attack: "Re-Association",
        defense: "Block Requests",
        description: "Forced reconnection → Block malicious requests",
    },
    AttackDefense {
        attack: "SSDP Flood",
        defense: "Block Traffic",
        description: "Service discovery flood → Block SSDP traffic",
    },
];

pub const TEAM: [TeamMember; 5] = [
    TeamMember {
        name: "Ghala",
        role: "Binary Model + Frontend",
    },
    TeamMember {
        name: "Mohammed",
        role: "Data + Live Detection + Backend + Defense",
    },
    TeamMember {
        name: "Yaser",
        role: "Multi-class Model",
    },
    TeamMember {
        name: "Lina",
        role: "Integration + 3D Prototype Case",
    },
    TeamMember {
        name: "Haya",
        role: "RAG + Documentation",
    },
];

pub const RAG_CORE: [Card; 3] = [
    Card {
        title: "Packet Analytics",
        body: "Structured DB queries for packet logs and statistics",
    },
    Card {
        title: "Attack Knowledge",
        body: "Curated file explanations and documentation",
    },
    Card {
        title: "OOS Handling",
        body: "Politely rejects irrelevant queries",
    },
];

pub const RAG_SOURCES: [Card; 2] = [
    Card {
        title: "PostgreSQL",
        body: "Real-time packet logs and network statistics",
    },
    Card {
        title: "attacks.txt",
        body: "Curated attack documentation and explanations",
    },
];

pub const RAG_PIPELINE: Flow = Flow {
    title: "Pipeline",
    steps: &[
        FlowStep {
            title: "1. Classifier",
            description: "Routes to SQL / Docs / OOS",
        },
        FlowStep {
            title: "2. Executor",
            description: "Generates queries or retrieves docs",
        },
        FlowStep {
            title: "3. GPT (gpt-4o)",
            description: "Short, factual answers",
        },
    ],
};

pub const RAG_EXAMPLES: [Card; 2] = [
    Card {
        title: "\"How many Deauth packets?\"",
        body: "SQL Query",
    },
    Card {
        title: "\"What is Evil Twin attack?\"",
        body: "Documentation",
    },
];

pub const PREPROCESSING_STEPS: [FlowStep; 4] = [
    FlowStep {
        title: "Numeric Imputation + Scaling",
        description: "Fill missing values and normalize ranges",
    },
    FlowStep {
        title: "Categorical Encoding",
        description: "Convert categories with 'NA' for unknowns",
    },
    FlowStep {
        title: "Feature Order Enforcement",
        description: "Consistent ordering for micro-batches",
    },
    FlowStep {
        title: "Identifier Filtering",
        description: "Remove MAC/SSID for better generalization",
    },
];

/// Total engineered features; the gallery shows the core subset
pub const ENGINEERED_FEATURE_COUNT: usize = 31;

pub const CORE_FEATURES: [Feature; 12] = [
    Feature {
        name: "Packet Rate",
        description: "Frequency of packet transmission",
        binary: 0.24,
        multi: 0.19,
    },
    Feature {
        name: "Signal Strength (RSSI)",
        description: "RSSI values and variations",
        binary: 0.18,
        multi: 0.22,
    },
    Feature {
        name: "Channel Usage",
        description: "Channel hopping patterns",
        binary: 0.16,
        multi: 0.15,
    },
    Feature {
        name: "Frame Types",
        description: "Distribution of frame types",
        binary: 0.14,
        multi: 0.18,
    },
    Feature {
        name: "Timing Intervals",
        description: "Inter-packet timing patterns",
        binary: 0.12,
        multi: 0.13,
    },
    Feature {
        name: "Sequence Numbers",
        description: "Sequence number patterns",
        binary: 0.10,
        multi: 0.08,
    },
    Feature {
        name: "Frame Sizes",
        description: "Packet size distributions",
        binary: 0.06,
        multi: 0.05,
    },
    Feature {
        name: "Beacon Count",
        description: "802.11 beacons per window",
        binary: 0.08,
        multi: 0.07,
    },
    Feature {
        name: "Probe Requests",
        description: "Active scan attempts",
        binary: 0.09,
        multi: 0.06,
    },
    Feature {
        name: "Retry Flag Rate",
        description: "MAC layer retries density",
        binary: 0.07,
        multi: 0.09,
    },
    Feature {
        name: "Mgmt/Data Ratio",
        description: "Mgmt vs data frames",
        binary: 0.11,
        multi: 0.10,
    },
    Feature {
        name: "SSID Changes",
        description: "BSSID/SSID switching",
        binary: 0.05,
        multi: 0.07,
    },
];

pub const CAPTURE_FACTS: [SpecRow; 4] = [
    SpecRow {
        key: "Environment",
        value: "Isolated router (safe lab)",
    },
    SpecRow {
        key: "Collection",
        value: "Self-collected",
    },
    SpecRow {
        key: "Format",
        value: "CSV feature dumps",
    },
    SpecRow {
        key: "Identifiers",
        value: "MAC/SSID filtered out",
    },
];

pub const PI_SPECS: [SpecRow; 5] = [
    SpecRow {
        key: "CPU",
        value: "Quad-core (ARM)",
    },
    SpecRow {
        key: "RAM",
        value: "2–4 GB",
    },
    SpecRow {
        key: "OS",
        value: "Linux (32/64-bit)",
    },
    SpecRow {
        key: "Runtime",
        value: "Python + LightGBM (CPU)",
    },
    SpecRow {
        key: "Case & Cooling",
        value: "Passive case (optional fan)",
    },
];

pub const ADAPTER_SPECS: [SpecRow; 4] = [
    SpecRow {
        key: "Chipset",
        value: "Realtek RTL8812AU (example)",
    },
    SpecRow {
        key: "Modes",
        value: "Monitor + Injection",
    },
    SpecRow {
        key: "Bands",
        value: "2.4 / 5 GHz",
    },
    SpecRow {
        key: "Interface",
        value: "USB 3.0",
    },
];

pub const DATA_PATH: [&str; 6] = [
    "Adapter (Monitor)",
    "Capture",
    "Preprocess",
    "LightGBM Inference",
    "Defense Action",
    "Continuous Monitor",
];

pub const DEMO_LINES: [&str; 5] = [
    "$ python live_detect.py",
    "Loading models...",
    "Monitoring network traffic...",
    "⚠  ATTACK DETECTED: Deauth Attack",
    "Defense activated: Blocking malicious packets",
];

pub const DEMO_BANNER: &str = "Detection Time: 0.8s | Confidence: 99.2% | Action: Block";

/// Model latency cards in the charts view
pub const LATENCY_CARDS: [Stat; 4] = [
    Stat {
        label: "LightGBM",
        value: "< 1s",
        sub: "chosen",
    },
    Stat {
        label: "Random Forest",
        value: "~ 2s",
        sub: "slower",
    },
    Stat {
        label: "Neural Net",
        value: "~ 3s",
        sub: "too slow",
    },
    Stat {
        label: "One-Class SVM",
        value: "~ 1.5s",
        sub: "high FP",
    },
];

pub const ACCURACY_F1_CARDS: [Stat; 2] = [
    Stat {
        label: "Binary (LightGBM)",
        value: "Acc ~98.5%",
        sub: "F1 ~98%",
    },
    Stat {
        label: "Multi-class (LightGBM)",
        value: "Acc ~93.9%",
        sub: "F1 ~93%",
    },
];

pub const CHART_SUMMARY: [Stat; 4] = [
    Stat {
        label: "Binary (LightGBM)",
        value: "Acc ~98.5%",
        sub: "F1 ~98%",
    },
    Stat {
        label: "Multi-class (6 types)",
        value: "Acc ~99.8%",
        sub: "F1 ~93%",
    },
    Stat {
        label: "Latency",
        value: "< 1s",
        sub: "Real-time detect",
    },
    Stat {
        label: "Decision",
        value: "LightGBM",
        sub: "Best accuracy/speed",
    },
];

pub const TRAINING_DETAILS: [Stat; 4] = [
    Stat {
        label: "Dataset Split",
        value: "70 / 15 / 15",
        sub: "Train / Val / Test",
    },
    Stat {
        label: "Features Used",
        value: "31",
        sub: "after preprocessing",
    },
    Stat {
        label: "Device",
        value: "Raspberry Pi",
        sub: "edge inference",
    },
    Stat {
        label: "Train Time",
        value: "~12m",
        sub: "LightGBM CPU",
    },
];

pub const CHART_TAKEAWAY: &str =
    "LightGBM achieves sub-second detection with the best trade-off between accuracy and speed.";

pub const QA_TITLE: &str = "Questions & Answers";
pub const QA_SUBTITLE: &str = "Thank you for your attention";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_rectangular() {
        for table in [
            DATASET_TABLE,
            FEATURE_IMPORTANCE_TABLE,
            MODELS_TABLE,
            IMPACT_TABLE,
            ETHICS_TABLE,
        ] {
            for row in table.rows {
                assert_eq!(row.len(), table.headers.len(), "{}", table.title);
            }
        }
    }

    #[test]
    fn test_core_features_within_engineered_count() {
        assert!(CORE_FEATURES.len() <= ENGINEERED_FEATURE_COUNT);
    }
}
