/// Kind of offering. Closed set: every entry is exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryType {
    Course,
    Resource,
    Exam,
}

impl EntryType {
    pub const COUNT: usize = 3;

    #[must_use]
    pub fn parse(string: &str) -> Option<Self> {
        match string.trim().to_lowercase().as_str() {
            "course" => Some(Self::Course),
            "resource" => Some(Self::Resource),
            "exam" => Some(Self::Exam),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::Resource => "resource",
            Self::Exam => "exam",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self; Self::COUNT] {
        &[Self::Course, Self::Resource, Self::Exam]
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntryType {
    type Err = ();

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::parse(string).ok_or(())
    }
}
