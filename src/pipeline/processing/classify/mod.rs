//! Classifiers: free text to one label from a closed set.

pub mod birthplace;
pub mod marks;
pub mod occupation;
pub mod zodiac;

pub use birthplace::{BirthCountry, BirthplaceTable};
pub use marks::{detect_currency_amount, detect_marks};
pub use occupation::OccupationTable;
pub use zodiac::zodiac_sign;
