/// FBS conference names keyed by the short name the API filters on
use phf::phf_map;

static CONFERENCE_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "ACC" => "Atlantic Coast Conference",
    "B12" => "Big 12 Conference",
    "B1G" => "Big Ten Conference",
    "SEC" => "Southeastern Conference",
    "PAC" => "Pac-12 Conference",
    "AAC" => "American Athletic Conference",
    "CUSA" => "Conference USA",
    "MAC" => "Mid-American Conference",
    "MWC" => "Mountain West Conference",
    "SBC" => "Sun Belt Conference",
    "Ind" => "FBS Independents",
};

/// Full conference name, falling back to the short name for unknown ones
pub fn conference_name(abbrev: &str) -> &str {
    CONFERENCE_NAMES.get(abbrev).copied().unwrap_or(abbrev)
}
