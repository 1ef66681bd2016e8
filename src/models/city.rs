#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,     // CHI
    NewYorkCity, // NYC
    Washington,  // WASH
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    pub fn code(&self) -> &'static str {
        match self {
            City::Chicago => "chi",
            City::NewYorkCity => "nyc",
            City::Washington => "wash",
        }
    }

    /// Helper: convert input code from the prompt (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "chi" => Some(City::Chicago),
            "nyc" => Some(City::NewYorkCity),
            "wash" => Some(City::Washington),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Backing CSV file name, resolved under the configured data directory
    pub fn data_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}
