/**
 * Account Realms
 *
 * The server hosts several independent account systems. They share the
 * gateway logic and differ only in which table they live in, what the
 * identity column is called, which profile columns they keep and whether
 * a successful login is recorded.
 */

use serde::{Deserialize, Serialize};

/// Optional profile data accepted at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Email,
    Phone,
    Region,
}

/// An independent account table served by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Realm {
    /// kdt sandbox accounts (`users`)
    Kdt,
    /// kdt accounts with contact details (`users2`)
    KdtExtended,
    /// ginipet accounts (`ginipet_users`)
    Ginipet,
    /// greenmarket accounts (`greenmarket_users`)
    Greenmarket,
}

impl Realm {
    /// Every realm, in routing order
    pub const ALL: [Realm; 4] = [
        Realm::Kdt,
        Realm::KdtExtended,
        Realm::Ginipet,
        Realm::Greenmarket,
    ];

    /// Short name used in logs and tokens
    pub fn name(self) -> &'static str {
        match self {
            Realm::Kdt => "kdt",
            Realm::KdtExtended => "kdt-extended",
            Realm::Ginipet => "ginipet",
            Realm::Greenmarket => "greenmarket",
        }
    }

    /// Account table
    pub fn table(self) -> &'static str {
        match self {
            Realm::Kdt => "users",
            Realm::KdtExtended => "users2",
            Realm::Ginipet => "ginipet_users",
            Realm::Greenmarket => "greenmarket_users",
        }
    }

    /// Column holding the unique identity
    pub fn identity_column(self) -> &'static str {
        match self {
            Realm::Greenmarket => "userid",
            _ => "username",
        }
    }

    /// Profile columns stored at registration, paired with their source field
    pub fn profile_columns(self) -> &'static [(&'static str, ProfileField)] {
        match self {
            Realm::Kdt => &[],
            Realm::KdtExtended => &[("email", ProfileField::Email), ("tel", ProfileField::Phone)],
            Realm::Ginipet => &[("tel", ProfileField::Phone), ("email", ProfileField::Email)],
            Realm::Greenmarket => &[
                ("email", ProfileField::Email),
                ("phone", ProfileField::Phone),
                ("region", ProfileField::Region),
            ],
        }
    }

    /// Whether a successful login updates `last_login`
    pub fn tracks_last_login(self) -> bool {
        matches!(self, Realm::Greenmarket)
    }

    /// Registration route
    pub fn register_path(self) -> &'static str {
        match self {
            Realm::Kdt => "/register",
            Realm::KdtExtended => "/register2",
            Realm::Ginipet => "/ginipet/register",
            Realm::Greenmarket => "/greenmarket/register",
        }
    }

    /// Login route
    pub fn login_path(self) -> &'static str {
        match self {
            Realm::Kdt => "/login",
            Realm::KdtExtended => "/login2",
            Realm::Ginipet => "/ginipet/login",
            Realm::Greenmarket => "/greenmarket/login",
        }
    }
}

impl std::fmt::Display for Realm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
