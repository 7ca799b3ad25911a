//! Puzzle categories and clue classification

use std::fmt;
use std::str::FromStr;

/// Topic of a puzzle, as announced on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Phrase,
    Person,
    Place,
    Thing,
    FoodAndDrink,
    OnTheMap,
    AroundTheHouse,
    /// No category could be determined
    Unknown,
}

/// Error for a name that is not a category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0:?}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Every known category, in classification order
    pub const ALL: [Self; 7] = [
        Self::Phrase,
        Self::Person,
        Self::Place,
        Self::Thing,
        Self::FoodAndDrink,
        Self::OnTheMap,
        Self::AroundTheHouse,
    ];

    /// Display name; empty for `Unknown`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Phrase => "PHRASE",
            Self::Person => "PERSON",
            Self::Place => "PLACE",
            Self::Thing => "THING",
            Self::FoodAndDrink => "FOOD & DRINK",
            Self::OnTheMap => "ON THE MAP",
            Self::AroundTheHouse => "AROUND THE HOUSE",
            Self::Unknown => "",
        }
    }

    /// Clue words hinting at this category
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Phrase => &[
                "THE", "AND", "OF", "TO", "IN", "FOR", "ON", "WITH", "AT", "BY", "FROM",
            ],
            Self::Person => &[
                "ACTOR",
                "ACTRESS",
                "SINGER",
                "PRESIDENT",
                "ATHLETE",
                "DOCTOR",
                "TEACHER",
            ],
            Self::Place => &[
                "CITY", "COUNTRY", "MOUNTAIN", "OCEAN", "RIVER", "BUILDING", "PARK",
            ],
            Self::Thing => &["OBJECT", "ITEM", "DEVICE", "TOOL", "MACHINE", "VEHICLE"],
            Self::FoodAndDrink => &[
                "APPLE", "BANANA", "COFFEE", "WATER", "PIZZA", "BURGER", "WINE",
            ],
            Self::OnTheMap => &[
                "AMERICA", "EUROPE", "AFRICA", "ASIA", "PACIFIC", "ATLANTIC", "MOUNTAIN",
            ],
            Self::AroundTheHouse => &[
                "KITCHEN", "BATHROOM", "BEDROOM", "LIVING", "ROOM", "TABLE", "CHAIR",
            ],
            Self::Unknown => &[],
        }
    }

    /// Letters that show up more than usual in answers of this category
    #[must_use]
    pub const fn boosted_letters(self) -> &'static [char] {
        match self {
            Self::Phrase => &['T', 'H', 'E', 'A', 'N', 'D', 'O', 'F'],
            Self::Person => &['J', 'K', 'M', 'P', 'W'],
            Self::Place => &['C', 'L', 'N', 'S', 'T'],
            Self::FoodAndDrink => &['C', 'K', 'P', 'R', 'S'],
            Self::AroundTheHouse => &['B', 'C', 'K', 'T', 'R'],
            Self::Thing | Self::OnTheMap | Self::Unknown => &[],
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Classify a free-text clue
    ///
    /// A clue naming a category wins outright (first in `ALL` order); otherwise
    /// the first category with a keyword contained in the clue. Matching is by
    /// substring on the uppercased clue.
    ///
    /// # Examples
    /// ```
    /// use fortune_solver::core::Category;
    ///
    /// assert_eq!(Category::classify("famous person"), Category::Person);
    /// assert_eq!(Category::classify("a big city"), Category::Place);
    /// assert_eq!(Category::classify(""), Category::Unknown);
    /// ```
    #[must_use]
    pub fn classify(clue: &str) -> Self {
        if clue.trim().is_empty() {
            return Self::Unknown;
        }

        let clue = clue.to_uppercase();

        if let Some(&category) = Self::ALL.iter().find(|c| clue.contains(c.name())) {
            return category;
        }

        Self::ALL
            .iter()
            .find(|c| c.keywords().iter().any(|k| clue.contains(k)))
            .copied()
            .unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parse an exact category name, ignoring case and surrounding space
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_clues_are_unknown() {
        assert_eq!(Category::classify(""), Category::Unknown);
        assert_eq!(Category::classify("   "), Category::Unknown);
    }

    #[test]
    fn direct_category_names() {
        assert_eq!(Category::classify("PHRASE"), Category::Phrase);
        assert_eq!(Category::classify("person"), Category::Person);
        assert_eq!(Category::classify("Place"), Category::Place);
        assert_eq!(Category::classify("food & drink"), Category::FoodAndDrink);
        assert_eq!(Category::classify("On The Map"), Category::OnTheMap);
        assert_eq!(
            Category::classify("around the house"),
            Category::AroundTheHouse
        );
    }

    #[test]
    fn direct_name_beats_keywords() {
        // "THE" is a PHRASE keyword, but the PLACE name is found in the first pass
        assert_eq!(Category::classify("the place"), Category::Place);
    }

    #[test]
    fn first_name_in_order_wins() {
        assert_eq!(Category::classify("PERSON OR PHRASE"), Category::Phrase);
    }

    #[test]
    fn keyword_matches() {
        assert_eq!(Category::classify("CITY"), Category::Place);
        assert_eq!(Category::classify("DEVICE"), Category::Thing);
        assert_eq!(Category::classify("PIZZA"), Category::FoodAndDrink);
        assert_eq!(Category::classify("KITCHEN"), Category::AroundTheHouse);
        assert_eq!(Category::classify("EUROPE"), Category::OnTheMap);
    }

    #[test]
    fn keywords_match_as_substrings() {
        // "SINGER" contains the PHRASE keyword "IN", and PHRASE is checked first
        assert_eq!(Category::classify("singer"), Category::Phrase);
        // "MOUNTAIN" hides "IN" too, so it never reaches PLACE or ON THE MAP
        assert_eq!(Category::classify("MOUNTAIN"), Category::Phrase);
        assert_eq!(Category::classify("OCEAN"), Category::Place);
    }

    #[test]
    fn no_match_is_unknown() {
        assert_eq!(Category::classify("xyz"), Category::Unknown);
        assert_eq!(Category::classify("12345"), Category::Unknown);
    }

    #[test]
    fn from_str_round_trips_names() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>(), Ok(category));
        }
        assert_eq!(" person ".parse::<Category>(), Ok(Category::Person));
        assert!("PEOPLE".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn boost_lists() {
        assert_eq!(Category::Person.boosted_letters(), &['J', 'K', 'M', 'P', 'W']);
        assert!(Category::Thing.boosted_letters().is_empty());
        assert!(Category::Unknown.boosted_letters().is_empty());
    }

    #[test]
    fn unknown_display_is_empty() {
        assert_eq!(Category::Unknown.to_string(), "");
        assert!(!Category::Unknown.is_known());
        assert_eq!(Category::FoodAndDrink.to_string(), "FOOD & DRINK");
    }
}
