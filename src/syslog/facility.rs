use libc::c_int;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{Error, ErrorKind};

/// A syslog facility. A conversion to `c_int` is provided.
///
/// All variants are available on every Unix-like platform; where the
/// platform libc lacks one, it is mapped to a reasonable alternative.
#[allow(missing_docs)]
#[derive(Default, Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(rename_all = "lowercase")]
pub enum Facility {
    Auth,

    /// Log messages containing sensitive information.
    ///
    /// On platforms without `LOG_AUTHPRIV`: becomes `Auth`.
    AuthPriv,

    /// Periodic task scheduling daemons like `cron`.
    Cron,

    Daemon,
    Kern,
    Local0,
    Local1,
    Local2,
    Local3,
    Local4,
    Local5,
    Local6,
    Local7,
    Lpr,
    Mail,
    News,
    Syslog,
    #[default]
    User,
    Uucp,
}

impl Facility {
    /// Gets the name of this `Facility`, in lowercase.
    pub fn name(self) -> &'static str {
        match self {
            Facility::Auth => "auth",
            Facility::AuthPriv => "authpriv",
            Facility::Cron => "cron",
            Facility::Daemon => "daemon",
            Facility::Kern => "kern",
            Facility::Local0 => "local0",
            Facility::Local1 => "local1",
            Facility::Local2 => "local2",
            Facility::Local3 => "local3",
            Facility::Local4 => "local4",
            Facility::Local5 => "local5",
            Facility::Local6 => "local6",
            Facility::Local7 => "local7",
            Facility::Lpr => "lpr",
            Facility::Mail => "mail",
            Facility::News => "news",
            Facility::Syslog => "syslog",
            Facility::User => "user",
            Facility::Uucp => "uucp",
        }
    }
}

impl From<Facility> for c_int {
    fn from(facility: Facility) -> c_int {
        match facility {
            Facility::Auth => libc::LOG_AUTH,
            Facility::AuthPriv => log_authpriv(),
            Facility::Cron => libc::LOG_CRON,
            Facility::Daemon => libc::LOG_DAEMON,
            Facility::Kern => libc::LOG_KERN,
            Facility::Local0 => libc::LOG_LOCAL0,
            Facility::Local1 => libc::LOG_LOCAL1,
            Facility::Local2 => libc::LOG_LOCAL2,
            Facility::Local3 => libc::LOG_LOCAL3,
            Facility::Local4 => libc::LOG_LOCAL4,
            Facility::Local5 => libc::LOG_LOCAL5,
            Facility::Local6 => libc::LOG_LOCAL6,
            Facility::Local7 => libc::LOG_LOCAL7,
            Facility::Lpr => libc::LOG_LPR,
            Facility::Mail => libc::LOG_MAIL,
            Facility::News => libc::LOG_NEWS,
            Facility::Syslog => libc::LOG_SYSLOG,
            Facility::User => libc::LOG_USER,
            Facility::Uucp => libc::LOG_UUCP,
        }
    }
}

#[cfg(not(any(target_os = "solaris", target_os = "illumos")))]
fn log_authpriv() -> c_int {
    libc::LOG_AUTHPRIV
}
#[cfg(any(target_os = "solaris", target_os = "illumos"))]
fn log_authpriv() -> c_int {
    libc::LOG_AUTH
}

impl FromStr for Facility {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "auth" => Ok(Facility::Auth),
            "authpriv" => Ok(Facility::AuthPriv),
            "cron" => Ok(Facility::Cron),
            "daemon" => Ok(Facility::Daemon),
            "kern" => Ok(Facility::Kern),
            "local0" => Ok(Facility::Local0),
            "local1" => Ok(Facility::Local1),
            "local2" => Ok(Facility::Local2),
            "local3" => Ok(Facility::Local3),
            "local4" => Ok(Facility::Local4),
            "local5" => Ok(Facility::Local5),
            "local6" => Ok(Facility::Local6),
            "local7" => Ok(Facility::Local7),
            "lpr" => Ok(Facility::Lpr),
            "mail" => Ok(Facility::Mail),
            "news" => Ok(Facility::News),
            "syslog" => Ok(Facility::Syslog),
            "user" => Ok(Facility::User),
            "uucp" => Ok(Facility::Uucp),
            _ => track_panic!(ErrorKind::Invalid, "Undefined syslog facility: {:?}", s),
        }
    }
}

#[test]
fn facility_from_str() {
    assert_eq!("daemon".parse::<Facility>().unwrap(), Facility::Daemon);
    assert!("foobar".parse::<Facility>().is_err());
}

#[test]
fn facility_names_round_trip() {
    for facility in &[Facility::Auth, Facility::Cron, Facility::Local5, Facility::User] {
        assert_eq!(facility.name().parse::<Facility>().unwrap(), *facility);
    }
}
