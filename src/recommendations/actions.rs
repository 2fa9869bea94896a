//! Next-action labels keyed by process and status.
//!
//! Coverage is intentionally partial. A status without a row renders the
//! generic [`fallback::ACTION_LABEL`], which is a valid outcome and not an error.

use crate::constants::{fallback, processes};
use tracing::trace;

/// Rows of `(status, label)` for one process
pub type ActionTable = &'static [(&'static str, &'static str)];

const CAPTACION_VISITA: ActionTable = &[
    ("new", "Contactar"),
    ("registered", "Agendar Entrevista"),
    ("scheduled", "Preparar Entrevista"),
    ("interviewed", "Evaluar Caso"),
    ("qualified", "Crear Propuesta"),
    ("proposal_sent", "Ver Propuesta"),
    ("converted", "Abrir Expediente"),
];

const CAPTACION_TELEFONO: ActionTable = &[
    ("new", "Contactar"),
    ("contacted", "Calificar"),
    ("qualified", "Agendar Reunion"),
    ("meeting_scheduled", "Confirmar Reunion"),
    ("follow_up", "Llamar"),
];

const SEGUIMIENTO_PROPUESTAS: ActionTable = &[
    ("draft", "Enviar Propuesta"),
    ("ready", "Enviar Propuesta"),
    ("sent", "Hacer Seguimiento"),
    ("viewed", "Llamar Cliente"),
    ("negotiating", "Ajustar Propuesta"),
    ("accepted", "Generar Contrato"),
    ("expired", "Reactivar"),
];

const CONTRATO_MANDATO: ActionTable = &[
    ("draft", "Revisar Contrato"),
    ("in_review", "Aprobar Contrato"),
    ("sent_for_signature", "Recordar Firma"),
    ("pending_signature", "Recordar Firma"),
    ("signed", "Archivar"),
];

const DOCUMENTOS_NOTARIALES: ActionTable = &[
    ("pending", "Preparar Documentos"),
    ("draft", "Enviar a Revision"),
    ("in_review", "Consultar Notaria"),
    ("observed", "Corregir Borrador"),
    ("submitted", "Agendar Firma"),
    ("awaiting_signature", "Coordinar Firma"),
    ("signed", "Inscribir"),
    ("registering", "Consultar Conservador"),
    ("ready_for_delivery", "Entregar"),
];

const RESPUESTA_CORREOS: ActionTable = &[
    ("new", "Clasificar"),
    ("classified", "Redactar Respuesta"),
    ("drafted", "Revisar Borrador"),
    ("pending_review", "Revisar Borrador"),
    ("escalated", "Asignar Abogado"),
    ("approved", "Enviar Respuesta"),
    ("sent", "Confirmar Recepcion"),
    ("sla_breached_24h", "Responder Ahora"),
    ("sla_breached_48h", "Responder Ahora"),
];

const PROCESO_COBRANZA: ActionTable = &[
    ("pending", "Enviar Factura"),
    ("sent", "Enviar Recordatorio"),
    ("reminded", "Verificar Pago"),
    ("overdue", "Enviar Carta Cobranza"),
    ("escalated", "Enviar Cese"),
    ("paid", "Conciliar"),
    ("suspended", "Revisar Suspension"),
];

const FILTRO_CAUSAS: ActionTable = &[
    ("new", "Revisar Causa"),
    ("reviewing", "Analizar"),
    ("pending_decision", "Decidir"),
    ("assigned", "Ver Responsable"),
];

const REVISION_CASOS: ActionTable = &[
    ("scheduled", "Preparar Resumen"),
    ("prepared", "Agendar Revision"),
    ("in_review", "Revisar con Socio"),
    ("changes_requested", "Ajustar Estrategia"),
    ("approved", "Registrar Acuerdos"),
];

const SCRAPER_EXTERNO: ActionTable = &[
    ("running", "Ver Ejecucion"),
    ("processing", "Ver Ejecucion"),
    ("failed", "Reintentar"),
    ("changes_detected", "Notificar"),
];

/// Rows of the action table for one process, empty for unknown processes
pub fn action_entries(process_id: &str) -> ActionTable {
    match process_id {
        processes::CAPTACION_VISITA => CAPTACION_VISITA,
        processes::CAPTACION_TELEFONO => CAPTACION_TELEFONO,
        processes::SEGUIMIENTO_PROPUESTAS => SEGUIMIENTO_PROPUESTAS,
        processes::CONTRATO_MANDATO => CONTRATO_MANDATO,
        processes::DOCUMENTOS_NOTARIALES => DOCUMENTOS_NOTARIALES,
        processes::RESPUESTA_CORREOS => RESPUESTA_CORREOS,
        processes::PROCESO_COBRANZA => PROCESO_COBRANZA,
        processes::FILTRO_CAUSAS => FILTRO_CAUSAS,
        processes::REVISION_CASOS => REVISION_CASOS,
        processes::SCRAPER_EXTERNO => SCRAPER_EXTERNO,
        _ => &[],
    }
}

/// Short imperative describing the next manual action for a status
pub fn next_action_label(process_id: &str, status: &str) -> &'static str {
    action_entries(process_id)
        .iter()
        .find(|(row_status, _)| *row_status == status)
        .map(|(_, label)| *label)
        .unwrap_or_else(|| {
            trace!(process_id, status, "No action row, using generic label");
            fallback::ACTION_LABEL
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessCatalog;

    #[test]
    fn test_known_rows() {
        assert_eq!(next_action_label("seguimiento-propuestas", "draft"), "Enviar Propuesta");
        assert_eq!(next_action_label("respuesta-correos", "sent"), "Confirmar Recepcion");
        assert_eq!(next_action_label("proceso-cobranza", "escalated"), "Enviar Cese");
    }

    #[test]
    fn test_misses_use_generic_label() {
        assert_eq!(next_action_label("seguimiento-propuestas", "unknown_status"), "Ver Detalle");
        assert_eq!(next_action_label("nonexistent-process", "draft"), "Ver Detalle");
        assert_eq!(next_action_label("proceso-cobranza", ""), "Ver Detalle");
    }

    #[test]
    fn test_every_table_belongs_to_a_catalog_process() {
        let catalog = ProcessCatalog::builtin();
        for process_id in processes::ALL {
            assert!(catalog.get_process(process_id).is_some());
            assert!(!action_entries(process_id).is_empty(), "{process_id} has no actions");
        }
    }

    #[test]
    fn test_no_duplicate_statuses_per_table() {
        for process_id in processes::ALL {
            let entries = action_entries(process_id);
            for (i, (status, _)) in entries.iter().enumerate() {
                assert!(
                    entries[i + 1..].iter().all(|(other, _)| other != status),
                    "{process_id}: duplicate row for '{status}'"
                );
            }
        }
    }
}
