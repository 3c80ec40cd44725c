//! Field configuration of every entity exposed by the API.

use field::Field;
use serializer::Serializer;

lazy_static! {
    /// Serializer for user accounts.
    pub static ref USER_SERIALIZER: Serializer = user_serializer();
    /// Serializer for permission groups.
    pub static ref GROUP_SERIALIZER: Serializer = group_serializer();
    /// Serializer for cities.
    pub static ref CITY_SERIALIZER: Serializer = city_serializer();
    /// Serializer for call sources.
    pub static ref CALL_SOURCE_SERIALIZER: Serializer = call_source_serializer();
    /// Serializer for call units.
    pub static ref CALL_UNIT_SERIALIZER: Serializer = call_unit_serializer();
    /// Serializer for incidents.
    pub static ref INCIDENT_SERIALIZER: Serializer = incident_serializer();
    /// Compact serializer for calls.
    pub static ref CALL_SERIALIZER: Serializer = call_serializer();
    /// Serializer for the call volume overview.
    pub static ref CALL_OVERVIEW_SERIALIZER: Serializer = call_overview_serializer();
}

static INCIDENT_FIELDS: &[&str] = &[
    "incident_id",
    "case_id",
    "time_filed",
    "month_filed",
    "week_filed",
    "dow_filed",
    "street_num",
    "street_name",
    "zip",
    "city",
    "geox",
    "geoy",
    "beat",
    "district",
    "sector",
    "domestic",
    "juvenile",
    "gang_related",
    "num_officers",
    "ucr_code",
    "committed",
];

static CALL_FIELDS: &[&str] = &[
    "call_id",
    "city",
    "call_source",
    "primary_unit",
    "first_dispatched",
    "reporting_unit",
    "month_received",
    "week_received",
    "dow_received",
    "hour_received",
    "case_id",
    "street_num",
    "street_name",
    "zip",
    "crossroad1",
    "crossroad2",
    "geox",
    "geoy",
    "beat",
    "district",
    "sector",
    "business",
    "priority",
    "report_only",
    "cancelled",
    "time_received",
    "time_routed",
    "time_finished",
    "first_unit_dispatch",
    "first_unit_enroute",
    "first_unit_arrive",
    "first_unit_transport",
    "last_unit_clear",
    "time_closed",
    "close_comments",
];

/// Looks up the configured serializer of an entity by name.
pub fn serializer_for(entity: &str) -> Option<&'static Serializer> {
    Some(match entity {
        "user" => &*USER_SERIALIZER,
        "group" => &*GROUP_SERIALIZER,
        "city" => &*CITY_SERIALIZER,
        "call_source" => &*CALL_SOURCE_SERIALIZER,
        "call_unit" => &*CALL_UNIT_SERIALIZER,
        "incident" => &*INCIDENT_SERIALIZER,
        "call" => &*CALL_SERIALIZER,
        "call_overview" => &*CALL_OVERVIEW_SERIALIZER,
        _ => return None,
    })
}

/// Users link to themselves and to their groups.
pub fn user_serializer() -> Serializer {
    Serializer::new("user")
        .field(Field::identity("url", "users"))
        .values(&["username", "email"])
        .field(Field::link("groups", "groups"))
}

/// Groups link to themselves.
pub fn group_serializer() -> Serializer {
    Serializer::new("group")
        .field(Field::identity("url", "groups"))
        .field(Field::value("name"))
}

/// Builds the city serializer.
pub fn city_serializer() -> Serializer {
    Serializer::new("city").values(&["city_id", "descr"])
}

/// Builds the call source serializer.
pub fn call_source_serializer() -> Serializer {
    Serializer::new("call_source").values(&["call_source_id", "descr"])
}

/// Builds the call unit serializer.
pub fn call_unit_serializer() -> Serializer {
    Serializer::new("call_unit").values(&["call_unit_id", "descr"])
}

/// Incidents expand their city inline.
pub fn incident_serializer() -> Serializer {
    Serializer::new("incident")
        .values(INCIDENT_FIELDS)
        .field(Field::nested("city", city_serializer()))
        .read_only(INCIDENT_FIELDS)
}

/// Calls expand their city, source and the three unit roles, and omit empty fields.
pub fn call_serializer() -> Serializer {
    Serializer::compact("call")
        .values(CALL_FIELDS)
        .field(Field::nested("city", city_serializer()))
        .field(Field::nested("call_source", call_source_serializer()))
        .field(Field::nested("primary_unit", call_unit_serializer()))
        .field(Field::nested("first_dispatched", call_unit_serializer()))
        .field(Field::nested("reporting_unit", call_unit_serializer()))
        .read_only(CALL_FIELDS)
}

/// Call volume per time bucket, with single letter keys to keep bulk payloads small.
pub fn call_overview_serializer() -> Serializer {
    Serializer::new("call_overview")
        .field(Field::integer("m").source("month_received").read_only())
        .field(Field::integer("w").source("week_received").read_only())
        .field(Field::integer("d").source("dow_received").read_only())
        .field(Field::integer("h").source("hour_received").read_only())
        .field(Field::integer("n").source("call_id__count").read_only())
}
