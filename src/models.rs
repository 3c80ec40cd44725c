//! Records of the calls-for-service database.
//!
//! These mirror the rows handed over by the persistence layer, with related records already
//! joined in.

use chrono::{DateTime, Utc};
use failure::Error;

use common::{IntoValue, Value};
use record::{Attribute, Record};

/// A user account.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct User {
    /// Primary key.
    pub id: u32,
    /// Login name.
    pub username: String,
    /// Contact email, empty if not given.
    pub email: String,
    /// Groups the user belongs to.
    pub groups: Vec<Group>,
}

impl Record for User {
    fn entity(&self) -> &'static str {
        "user"
    }

    fn pk(&self) -> Value {
        self.id.into_value()
    }

    fn attribute(&self, name: &str) -> Result<Option<Attribute<'_>>, Error> {
        Ok(Some(match name {
            "id" => Attribute::value(self.id),
            "username" => Attribute::value(&self.username),
            "email" => Attribute::value(&self.email),
            "groups" => Attribute::many(&self.groups),
            _ => return Ok(None),
        }))
    }
}

/// A permission group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    /// Primary key.
    pub id: u32,
    /// Display name.
    pub name: String,
}

impl Record for Group {
    fn entity(&self) -> &'static str {
        "group"
    }

    fn pk(&self) -> Value {
        self.id.into_value()
    }

    fn attribute(&self, name: &str) -> Result<Option<Attribute<'_>>, Error> {
        Ok(Some(match name {
            "id" => Attribute::value(self.id),
            "name" => Attribute::value(&self.name),
            _ => return Ok(None),
        }))
    }
}

/// A city lookup entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct City {
    /// Primary key.
    pub city_id: i32,
    /// Name of the city.
    pub descr: String,
}

impl Record for City {
    fn entity(&self) -> &'static str {
        "city"
    }

    fn pk(&self) -> Value {
        self.city_id.into_value()
    }

    fn attribute(&self, name: &str) -> Result<Option<Attribute<'_>>, Error> {
        Ok(Some(match name {
            "city_id" => Attribute::value(self.city_id),
            "descr" => Attribute::value(&self.descr),
            _ => return Ok(None),
        }))
    }
}

/// How a call reached dispatch (phone, self-initiated, ...).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallSource {
    /// Primary key.
    pub call_source_id: i32,
    /// Description of the source.
    pub descr: String,
}

impl Record for CallSource {
    fn entity(&self) -> &'static str {
        "call_source"
    }

    fn pk(&self) -> Value {
        self.call_source_id.into_value()
    }

    fn attribute(&self, name: &str) -> Result<Option<Attribute<'_>>, Error> {
        Ok(Some(match name {
            "call_source_id" => Attribute::value(self.call_source_id),
            "descr" => Attribute::value(&self.descr),
            _ => return Ok(None),
        }))
    }
}

/// A responding unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallUnit {
    /// Primary key.
    pub call_unit_id: i32,
    /// Unit designation.
    pub descr: String,
}

impl Record for CallUnit {
    fn entity(&self) -> &'static str {
        "call_unit"
    }

    fn pk(&self) -> Value {
        self.call_unit_id.into_value()
    }

    fn attribute(&self, name: &str) -> Result<Option<Attribute<'_>>, Error> {
        Ok(Some(match name {
            "call_unit_id" => Attribute::value(self.call_unit_id),
            "descr" => Attribute::value(&self.descr),
            _ => return Ok(None),
        }))
    }
}

/// A filed incident report.
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Incident {
    pub incident_id: i32,
    pub case_id: Option<i32>,
    pub time_filed: Option<DateTime<Utc>>,
    pub month_filed: Option<i32>,
    pub week_filed: Option<i32>,
    pub dow_filed: Option<i32>,
    pub street_num: Option<i32>,
    pub street_name: Option<String>,
    pub zip: Option<i32>,
    pub city: Option<City>,
    pub geox: Option<f64>,
    pub geoy: Option<f64>,
    pub beat: Option<String>,
    pub district: Option<String>,
    pub sector: Option<String>,
    pub domestic: Option<bool>,
    pub juvenile: Option<bool>,
    pub gang_related: Option<bool>,
    pub num_officers: Option<i32>,
    pub ucr_code: Option<i32>,
    pub committed: Option<bool>,
}

impl Record for Incident {
    fn entity(&self) -> &'static str {
        "incident"
    }

    fn pk(&self) -> Value {
        self.incident_id.into_value()
    }

    fn attribute(&self, name: &str) -> Result<Option<Attribute<'_>>, Error> {
        Ok(Some(match name {
            "incident_id" => Attribute::value(self.incident_id),
            "case_id" => Attribute::value(self.case_id),
            "time_filed" => Attribute::value(self.time_filed),
            "month_filed" => Attribute::value(self.month_filed),
            "week_filed" => Attribute::value(self.week_filed),
            "dow_filed" => Attribute::value(self.dow_filed),
            "street_num" => Attribute::value(self.street_num),
            "street_name" => Attribute::value(&self.street_name),
            "zip" => Attribute::value(self.zip),
            "city" => Attribute::one(self.city.as_ref()),
            "geox" => Attribute::value(self.geox),
            "geoy" => Attribute::value(self.geoy),
            "beat" => Attribute::value(&self.beat),
            "district" => Attribute::value(&self.district),
            "sector" => Attribute::value(&self.sector),
            "domestic" => Attribute::value(self.domestic),
            "juvenile" => Attribute::value(self.juvenile),
            "gang_related" => Attribute::value(self.gang_related),
            "num_officers" => Attribute::value(self.num_officers),
            "ucr_code" => Attribute::value(self.ucr_code),
            "committed" => Attribute::value(self.committed),
            _ => return Ok(None),
        }))
    }
}

/// A call for service.
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Call {
    pub call_id: i64,
    pub city: Option<City>,
    pub call_source: Option<CallSource>,
    pub primary_unit: Option<CallUnit>,
    pub first_dispatched: Option<CallUnit>,
    pub reporting_unit: Option<CallUnit>,
    pub month_received: Option<i32>,
    pub week_received: Option<i32>,
    pub dow_received: Option<i32>,
    pub hour_received: Option<i32>,
    pub case_id: Option<i64>,
    pub street_num: Option<i32>,
    pub street_name: Option<String>,
    pub zip: Option<i32>,
    pub crossroad1: Option<String>,
    pub crossroad2: Option<String>,
    pub geox: Option<f64>,
    pub geoy: Option<f64>,
    pub beat: Option<String>,
    pub district: Option<String>,
    pub sector: Option<String>,
    pub business: Option<String>,
    pub priority: Option<String>,
    pub report_only: Option<bool>,
    pub cancelled: Option<bool>,
    pub time_received: Option<DateTime<Utc>>,
    pub time_routed: Option<DateTime<Utc>>,
    pub time_finished: Option<DateTime<Utc>>,
    pub first_unit_dispatch: Option<DateTime<Utc>>,
    pub first_unit_enroute: Option<DateTime<Utc>>,
    pub first_unit_arrive: Option<DateTime<Utc>>,
    pub first_unit_transport: Option<DateTime<Utc>>,
    pub last_unit_clear: Option<DateTime<Utc>>,
    pub time_closed: Option<DateTime<Utc>>,
    pub close_comments: Option<String>,
}

impl Record for Call {
    fn entity(&self) -> &'static str {
        "call"
    }

    fn pk(&self) -> Value {
        self.call_id.into_value()
    }

    fn attribute(&self, name: &str) -> Result<Option<Attribute<'_>>, Error> {
        Ok(Some(match name {
            "call_id" => Attribute::value(self.call_id),
            "city" => Attribute::one(self.city.as_ref()),
            "call_source" => Attribute::one(self.call_source.as_ref()),
            "primary_unit" => Attribute::one(self.primary_unit.as_ref()),
            "first_dispatched" => Attribute::one(self.first_dispatched.as_ref()),
            "reporting_unit" => Attribute::one(self.reporting_unit.as_ref()),
            "month_received" => Attribute::value(self.month_received),
            "week_received" => Attribute::value(self.week_received),
            "dow_received" => Attribute::value(self.dow_received),
            "hour_received" => Attribute::value(self.hour_received),
            "case_id" => Attribute::value(self.case_id),
            "street_num" => Attribute::value(self.street_num),
            "street_name" => Attribute::value(&self.street_name),
            "zip" => Attribute::value(self.zip),
            "crossroad1" => Attribute::value(&self.crossroad1),
            "crossroad2" => Attribute::value(&self.crossroad2),
            "geox" => Attribute::value(self.geox),
            "geoy" => Attribute::value(self.geoy),
            "beat" => Attribute::value(&self.beat),
            "district" => Attribute::value(&self.district),
            "sector" => Attribute::value(&self.sector),
            "business" => Attribute::value(&self.business),
            "priority" => Attribute::value(&self.priority),
            "report_only" => Attribute::value(self.report_only),
            "cancelled" => Attribute::value(self.cancelled),
            "time_received" => Attribute::value(self.time_received),
            "time_routed" => Attribute::value(self.time_routed),
            "time_finished" => Attribute::value(self.time_finished),
            "first_unit_dispatch" => Attribute::value(self.first_unit_dispatch),
            "first_unit_enroute" => Attribute::value(self.first_unit_enroute),
            "first_unit_arrive" => Attribute::value(self.first_unit_arrive),
            "first_unit_transport" => Attribute::value(self.first_unit_transport),
            "last_unit_clear" => Attribute::value(self.last_unit_clear),
            "time_closed" => Attribute::value(self.time_closed),
            "close_comments" => Attribute::value(&self.close_comments),
            _ => return Ok(None),
        }))
    }
}

/// One row of the call volume aggregate, grouped by time buckets.
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallOverview {
    pub month_received: i32,
    pub week_received: i32,
    pub dow_received: i32,
    pub hour_received: i32,
    /// Number of calls in the bucket.
    pub call_count: i64,
}

impl Record for CallOverview {
    fn entity(&self) -> &'static str {
        "call_overview"
    }

    /// Aggregate rows have no identity of their own.
    fn pk(&self) -> Value {
        Value::Null
    }

    fn attribute(&self, name: &str) -> Result<Option<Attribute<'_>>, Error> {
        Ok(Some(match name {
            "month_received" => Attribute::value(self.month_received),
            "week_received" => Attribute::value(self.week_received),
            "dow_received" => Attribute::value(self.dow_received),
            "hour_received" => Attribute::value(self.hour_received),
            "call_id__count" => Attribute::value(self.call_count),
            _ => return Ok(None),
        }))
    }
}
