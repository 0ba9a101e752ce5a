/// Static tables for the Cambium 00-11 project folder standard.
/// Every lookup table used by scaffolding and migration lives here.

/// Top-level sections of a project and their immediate subfolders
pub const TAXONOMY_SECTIONS: &[(&str, &[&str])] = &[
    (
        "00-contract",
        &[
            "addenda",
            "agreement",
            "drawings",
            "ifc",
            "ift",
            "insurance",
            "scope",
            "specifications",
        ],
    ),
    (
        "01-admin",
        &[
            "certs",
            "change-order",
            "closeout",
            "correspondence",
            "meeting-minutes",
            "rfi",
            "schedule",
            "site-instruction",
            "submittal",
            "transmittal",
        ],
    ),
    ("02-financial", &["budget", "invoice", "progress-claim"]),
    ("03-cad", &["working", "archive", "library"]),
    (
        "04-drawings",
        &["approved", "buyout", "ifc", "install", "production", "revision"],
    ),
    ("05-materials", &["finish", "hardware", "spec"]),
    (
        "06-samples",
        &["finish", "glass", "hardware", "laminate", "stone", "veneer"],
    ),
    ("07-production", &[]),
    ("08-buyout", &[]),
    (
        "09-coordination",
        &["doors", "electrical", "glazing", "mechanical"],
    ),
    ("10-site", &["measure", "photo"]),
    (
        "11-awmac",
        &["submissions", "qc", "_source", "_received", "_template"],
    ),
    ("_archive", &[]),
    ("_cambium", &["cache"]),
];

/// Underscore-prefixed working folders nested below specific taxonomy paths
pub const TAXONOMY_EXTRAS: &[(&str, &[&str])] = &[
    ("01-admin/rfi", &["_received", "_template"]),
    ("01-admin/submittal", &["_source", "_template"]),
    ("08-buyout", &["_received"]),
    ("09-coordination/doors", &["_received", "_source"]),
];

/// Legacy folder names (upper-cased) and the taxonomy path they migrate to.
/// Known misspellings are listed as keys of their own.
pub const FOLDER_RULES: &[(&str, &str)] = &[
    // Factory orders / production
    ("FO", "07-production"),
    ("FOS", "07-production"),
    ("FACTORY_ORDER", "07-production"),
    ("PDF SHOP DWG", "04-drawings/production"),
    ("PDFS", "04-drawings/production"),
    ("SHOPS", "04-drawings/production"),
    ("REVIEWED SHOP DWG", "04-drawings/approved"),
    ("REVIWED SHOP DWG", "04-drawings/approved"),
    ("REVIEWED", "04-drawings/approved"),
    ("APPROVEDF DWG & SAMPLES", "04-drawings/approved"),
    ("IFC", "04-drawings/ifc"),
    ("IFT", "04-drawings/ifc"),
    // Administration
    ("PO", "08-buyout"),
    ("POS", "08-buyout"),
    ("PURCHASE_ORDER", "08-buyout"),
    ("TRANSMITTAL", "01-admin/transmittal"),
    ("TRANSMITTALS", "01-admin/transmittal"),
    ("RFI", "01-admin/rfi"),
    ("RFIS", "01-admin/rfi"),
    ("REQUEST_FOR_INFORMATION", "01-admin/rfi"),
    ("SI", "01-admin/site-instruction"),
    ("CCN", "01-admin/change-order"),
    ("CCNS", "01-admin/change-order"),
    ("PCN", "01-admin/change-order"),
    ("PCNS", "01-admin/change-order"),
    ("SAMPLES", "06-samples"),
    // Contract / specs
    ("SPEC", "00-contract/specifications"),
    ("SPECS", "00-contract/specifications"),
    ("CONTRACT DUCUMENT", "00-contract"),
    ("CONTRACT DOCUMENT", "00-contract"),
    ("CONTRACTOR_DOCS_RECEIVED", "00-contract"),
    ("ARCHITECTURALS", "00-contract/drawings"),
    // Site
    ("SITE MEASURE", "10-site/measure"),
    ("SITE MEASURES", "10-site/measure"),
    ("SITE_MEASURE", "10-site/measure"),
    ("SITE MEASUER", "10-site/measure"),
    ("SITE MEASUERMENT", "10-site/measure"),
    ("SITE PICTURE", "10-site/photo"),
    ("SITE PICTURES", "10-site/photo"),
    // Misc
    ("SCHEDULE", "01-admin/schedule"),
    ("MEETING MINUTES", "01-admin/meeting-minutes"),
];

/// Extensions (lower-case, with the dot) routed when found loose at the project root
pub const EXTENSION_RULES: &[(&str, &str)] = &[
    (".dwg", "03-cad/working"),
    (".dxf", "03-cad/working"),
];

/// OS artifacts never worth migrating (compared lower-case)
pub const JUNK_FILE_NAMES: &[&str] = &["thumbs.db", ".ds_store", "desktop.ini"];

/// Disposable extensions (lower-case, with the dot)
pub const JUNK_EXTENSIONS: &[&str] = &[".bak", ".tmp", ".log"];

/// Suffix appended to the source folder when no migration destination is given
pub const DEFAULT_DEST_SUFFIX: &str = "-cambium";

/// Characters of page text shown per PDF page
pub const DEFAULT_PDF_PREVIEW_CHARS: usize = 1500;

/// Category used for inventory items that do not name one
pub const DEFAULT_INVENTORY_CATEGORY: &str = "OTHER";
