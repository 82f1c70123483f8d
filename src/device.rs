use serde::{Deserialize, Serialize};

// ── Device type codes ───────────────────────────────────────────────
//
// Well-known category codes for the `kind` field. The field stays an
// open string so new categories never require a code change; these are
// convenience constants only.

/// Well-known device category codes.
pub mod device_type {
    pub const SYSUN: &str = "SYSUN"; // system unit of a computer
    pub const DISPL: &str = "DISPL"; // display, monitor
    pub const KEYBR: &str = "KEYBR"; // keyboard
    pub const MOUSE: &str = "MOUSE"; // mouse
    pub const PRMFD: &str = "PRMFD"; // multifunctional device
    pub const LPTOP: &str = "LPTOP"; // notebook, laptop
    pub const SCAND: &str = "SCAND"; // flatbed or other scanner
    pub const UPSUN: &str = "UPSUN"; // uninterruptible power supply
    pub const MONPU: &str = "MONPU"; // all-in-one computer
    pub const PBXUN: &str = "PBXUN"; // private branch exchange unit
    pub const NARTR: &str = "NARTR"; // network router
    pub const SERVR: &str = "SERVR"; // net server
    pub const NASWT: &str = "NASWT"; // network switch
    pub const CRTOK: &str = "CRTOK"; // hardware crypto token
    pub const NAMDM: &str = "NAMDM"; // network modem
}

// ── Device record ───────────────────────────────────────────────────

/// One piece of inventoried equipment.
///
/// Every field is free-form text — dates, account numbers and category
/// codes are not validated here. On the wire the record is a JSON
/// document using the legacy field names (`devname`, `invnumb`, ...);
/// missing fields decode to `""` and unknown fields are ignored, so
/// older and newer documents both decode cleanly.
///
/// `id` is the record's own business identifier. It is independent of
/// the key a record is stored under — the store never consults it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    pub id: String,

    /// Device name, e.g. a model designation.
    #[serde(rename = "devname")]
    pub name: String,

    /// Inventory number.
    #[serde(rename = "invnumb")]
    pub number: String,

    /// Category code, see [`device_type`].
    #[serde(rename = "devtype")]
    pub kind: String,

    /// Manufacture date, free text.
    #[serde(rename = "mnfdate")]
    pub manufactured: String,

    /// Country of manufacture.
    #[serde(rename = "mnfcountry")]
    pub country: String,

    /// Manufacturer name.
    #[serde(rename = "mnfname")]
    pub fabricator: String,

    /// Start-of-service date, free text.
    #[serde(rename = "expldate")]
    pub exploit_from: String,

    /// Name as carried in the accounting system.
    #[serde(rename = "devname_acc")]
    pub acc_name: String,

    /// Accounting account number.
    pub account: String,

    #[serde(rename = "sernumb")]
    pub serial_number: String,

    /// Workstation or grouping tag, e.g. "WS11".
    pub included: String,

    pub location: String,

    /// Person the device is assigned to.
    pub user: String,
}
