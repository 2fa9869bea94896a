//! # Engine Constants
//!
//! Fallback values and status groupings shared by the progress calculator, the
//! urgency classifier and the recommendation tables. Every silent fallback the
//! engine performs resolves to one of the values defined here.

/// Values returned when a lookup misses
pub mod fallback {
    /// Action label for any (process, status) pair missing from the action table
    pub const ACTION_LABEL: &str = "Ver Detalle";

    /// Agent color reported by the degenerate progress of an unknown process
    pub const AGENT_COLOR: &str = "slate";

    /// Noun used in suggestions when the entity carries no display name
    pub const DISPLAY_NAME: &str = "este registro";
}

/// Status groupings for urgency evaluation
pub mod status_groups {
    /// Status that marks a freshly captured entity for the age-based rule
    pub const NEW_STATUS: &str = "new";

    /// Statuses that are urgent on their own when no time-based rule applies
    pub const FLAGGED_STATUSES: &[&str] = &[
        "overdue",
        "sla_breached_24h",
        "sla_breached_48h",
        "escalated",
        "suspended",
    ];
}

/// Default urgency thresholds, in the units they are configured with
pub mod thresholds {
    /// Days before a due date at which an entity turns to warning
    pub const DUE_DATE_WARNING_DAYS: i64 = 3;

    /// Hours before an SLA deadline at which an entity turns to warning
    pub const SLA_WARNING_HOURS: i64 = 4;

    /// Age in hours after which a `new` entity is urgent
    pub const NEW_ENTITY_URGENT_HOURS: i64 = 4;

    /// Age in hours after which a `new` entity is a warning
    pub const NEW_ENTITY_WARNING_HOURS: i64 = 2;

    /// Days without movement after which an entity is urgent
    pub const STALE_URGENT_DAYS: i64 = 7;

    /// Days without movement after which an entity is a warning
    pub const STALE_WARNING_DAYS: i64 = 3;
}

/// Process identifiers of the built-in catalog
pub mod processes {
    pub const CAPTACION_VISITA: &str = "captacion-visita";
    pub const CAPTACION_TELEFONO: &str = "captacion-telefono";
    pub const SEGUIMIENTO_PROPUESTAS: &str = "seguimiento-propuestas";
    pub const CONTRATO_MANDATO: &str = "contrato-mandato";
    pub const DOCUMENTOS_NOTARIALES: &str = "documentos-notariales";
    pub const RESPUESTA_CORREOS: &str = "respuesta-correos";
    pub const PROCESO_COBRANZA: &str = "proceso-cobranza";
    pub const FILTRO_CAUSAS: &str = "filtro-causas";
    pub const REVISION_CASOS: &str = "revision-casos";
    pub const SCRAPER_EXTERNO: &str = "scraper-externo";

    /// All built-in process ids in catalog order
    pub const ALL: &[&str] = &[
        CAPTACION_VISITA,
        CAPTACION_TELEFONO,
        SEGUIMIENTO_PROPUESTAS,
        CONTRATO_MANDATO,
        DOCUMENTOS_NOTARIALES,
        RESPUESTA_CORREOS,
        PROCESO_COBRANZA,
        FILTRO_CAUSAS,
        REVISION_CASOS,
        SCRAPER_EXTERNO,
    ];
}
