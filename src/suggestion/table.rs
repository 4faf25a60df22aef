/// Recognized time-of-day categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    MidMorning,
    Afternoon,
    MidAfternoon,
    Dinner,
    AfterDinner,
}

/// One row of the suggestion table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub time_of_day: TimeOfDay,
    /// Normalized (lowercase) label matched against user input
    pub label: &'static str,
    /// Label as presented to the user
    pub display_name: &'static str,
    pub suggestion: &'static str,
}

/// Rows are ordered like the `TimeOfDay` variants.
pub static SUGGESTION_TABLE: [TableEntry; 6] = [
    TableEntry {
        time_of_day: TimeOfDay::Morning,
        label: "morning",
        display_name: "Morning",
        suggestion: "Try having some Eggs!",
    },
    TableEntry {
        time_of_day: TimeOfDay::MidMorning,
        label: "mid-morning",
        display_name: "Mid-morning",
        suggestion: "How about a healthy Fruit snack?",
    },
    TableEntry {
        time_of_day: TimeOfDay::Afternoon,
        label: "afternoon",
        display_name: "Afternoon",
        suggestion: "A Sandwich would be great for lunch.",
    },
    TableEntry {
        time_of_day: TimeOfDay::MidAfternoon,
        label: "mid-afternoon",
        display_name: "Mid-afternoon",
        suggestion: "Maybe a slice of Cake?",
    },
    TableEntry {
        time_of_day: TimeOfDay::Dinner,
        label: "dinner",
        display_name: "Dinner",
        suggestion: "Pasta sounds like a good dinner option.",
    },
    TableEntry {
        time_of_day: TimeOfDay::AfterDinner,
        label: "after dinner",
        display_name: "After Dinner",
        suggestion: "Treat yourself with some Ice cream!",
    },
];

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 6] = [
        TimeOfDay::Morning,
        TimeOfDay::MidMorning,
        TimeOfDay::Afternoon,
        TimeOfDay::MidAfternoon,
        TimeOfDay::Dinner,
        TimeOfDay::AfterDinner,
    ];

    pub fn entry(self) -> &'static TableEntry {
        &SUGGESTION_TABLE[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.entry().label
    }

    pub fn display_name(self) -> &'static str {
        self.entry().display_name
    }

    pub fn suggestion(self) -> &'static str {
        self.entry().suggestion
    }
}

/// Exact match against the normalized labels. Callers normalize first.
pub fn lookup(normalized: &str) -> Option<&'static TableEntry> {
    SUGGESTION_TABLE.iter().find(|entry| entry.label == normalized)
}

/// Human-readable listing of every label and its suggestion, one per line
pub fn labels_listing() -> String {
    let width = SUGGESTION_TABLE
        .iter()
        .map(|entry| entry.display_name.len())
        .max()
        .unwrap_or(0);

    SUGGESTION_TABLE
        .iter()
        .map(|entry| format!("{:<width$}  {}", entry.display_name, entry.suggestion))
        .collect::<Vec<_>>()
        .join("\n")
}
