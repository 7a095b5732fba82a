//! Column and label names shared by the registry, the finalizer and the CLI.
//! Raw description labels are spelled the way source pages print them.

// Identification columns carried by every raw record
pub const SOURCE_URL: &str = "source_url";
pub const CATEGORY: &str = "category";
pub const NAME: &str = "name";
pub const ALIAS_TEXT: &str = "alias_text";
pub const IMAGE_URL: &str = "image_url";
pub const REMARKS: &str = "remarks";
pub const CAUTION_TEXT: &str = "caution_text";
pub const FIELD_OFFICE: &str = "field_office";

/// Top-level columns in the order they open a flattened record set.
pub const IDENTIFICATION_COLUMNS: [&str; 8] = [
    SOURCE_URL,
    CATEGORY,
    NAME,
    ALIAS_TEXT,
    IMAGE_URL,
    REMARKS,
    CAUTION_TEXT,
    FIELD_OFFICE,
];

// Free-text description labels
pub const LABEL_DOB_USED: &str = "Date(s) of Birth Used";
pub const LABEL_DOB: &str = "Date of Birth";
pub const LABEL_DOB_SHORT: &str = "DOB";
pub const LABEL_HEIGHT: &str = "Height";
pub const LABEL_WEIGHT: &str = "Weight";
pub const LABEL_HAIR: &str = "Hair";
pub const LABEL_EYES: &str = "Eyes";
pub const LABEL_SEX: &str = "Sex";
pub const LABEL_NATIONALITY: &str = "Nationality";
pub const LABEL_NCIC: &str = "NCIC";
pub const LABEL_LANGUAGES: &str = "Languages";
pub const LABEL_OCCUPATION: &str = "Occupation";
pub const LABEL_PLACE_OF_BIRTH: &str = "Place of Birth";
pub const LABEL_SCARS_AND_MARKS: &str = "Scars and Marks";
pub const LABEL_RACE: &str = "Race";
pub const LABEL_RACE_LOWER: &str = "race";
pub const LABEL_BUILD: &str = "Build";
pub const LABEL_CITIZENSHIP: &str = "Citizenship";
pub const LABEL_COMPLEXION: &str = "Complexion";
pub const LABEL_AGE: &str = "Age";

/// Date-of-birth labels, most specific first.
pub const DOB_LABELS: [&str; 3] = [LABEL_DOB_USED, LABEL_DOB, LABEL_DOB_SHORT];

// Derived and renamed output columns
pub const DATE_OF_BIRTH: &str = "date_of_birth";
pub const AGE_YEARS: &str = "age_years";
pub const ZODIAC_SIGN: &str = "zodiac_sign";
pub const SEX: &str = "sex";
pub const NATIONALITY: &str = "nationality";
pub const NCIC_NUMBER: &str = "ncic_number";
pub const EYE_COLOR: &str = "eye_color";
pub const HEIGHT_CM: &str = "height_cm";
pub const WEIGHT_KG: &str = "weight_kg";
pub const HAIR_COLOR: &str = "hair_color";
pub const HAS_MARK: &str = "has_mark";
pub const LANGUAGE_PRIMARY: &str = "language_primary";
pub const LANGUAGE_SECONDARY: &str = "language_secondary";
pub const LANGUAGE_TERTIARY: &str = "language_tertiary";
pub const OCCUPATION_CATEGORY: &str = "occupation_category";
pub const BIRTH_COUNTRY: &str = "birth_country";
pub const BIRTH_COUNTRY_CODE: &str = "birth_country_code";
pub const ALIAS_COUNT: &str = "alias_count";
pub const HAS_CAUTION: &str = "has_caution";

/// Occupation label when the source field is absent or blank.
pub const OCCUPATION_UNKNOWN: &str = "Unknown";
/// Occupation label when text is present but matches no keyword.
pub const OCCUPATION_OTHER: &str = "Other";

/// Fixed thematic column order of the final schema:
/// identification, demographics, physical description, languages,
/// occupation, agency metadata.
pub const DEFAULT_COLUMN_ORDER: [&str; 24] = [
    // Identification
    SOURCE_URL,
    NAME,
    ALIAS_TEXT,
    ALIAS_COUNT,
    NCIC_NUMBER,
    CATEGORY,
    // Demographics
    DATE_OF_BIRTH,
    AGE_YEARS,
    ZODIAC_SIGN,
    SEX,
    NATIONALITY,
    BIRTH_COUNTRY,
    BIRTH_COUNTRY_CODE,
    // Physical description
    HEIGHT_CM,
    WEIGHT_KG,
    EYE_COLOR,
    HAIR_COLOR,
    HAS_MARK,
    // Languages
    LANGUAGE_PRIMARY,
    LANGUAGE_SECONDARY,
    LANGUAGE_TERTIARY,
    // Occupation
    OCCUPATION_CATEGORY,
    // Agency metadata
    FIELD_OFFICE,
    HAS_CAUTION,
];
