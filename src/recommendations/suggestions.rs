//! Natural-language nudges for specific process/status combinations.

use crate::constants::{fallback, processes};
use crate::entity::EntityRecord;
use crate::urgency::{compute_urgency, UrgencyLevel};

/// Nudges for an entity, computing its urgency against the wall clock
pub fn suggestions(process_id: &str, status: &str, entity: &EntityRecord) -> Vec<String> {
    suggestions_with_urgency(process_id, status, entity, compute_urgency(entity))
}

/// Nudges for an entity whose urgency is already known.
///
/// Returns an empty list when nothing applies; that is the normal outcome for
/// most entities.
pub fn suggestions_with_urgency(
    process_id: &str,
    status: &str,
    entity: &EntityRecord,
    urgency: UrgencyLevel,
) -> Vec<String> {
    let name = entity.display_name().unwrap_or(fallback::DISPLAY_NAME);
    let pressing = urgency.needs_attention();

    let mut nudges = Vec::new();
    match (process_id, status) {
        (processes::CAPTACION_VISITA | processes::CAPTACION_TELEFONO, "new") => {
            if urgency.is_urgent() {
                nudges.push(format!("{name} lleva más de 4 horas sin contacto: llamar ahora"));
            } else {
                nudges.push(format!("Contactar a {name} y registrar el motivo de la consulta"));
            }
        }
        (processes::CAPTACION_VISITA, "interviewed") => {
            nudges.push(format!("Definir si el caso de {name} es viable y preparar propuesta"));
        }
        (processes::CAPTACION_TELEFONO, "meeting_scheduled") => {
            nudges.push(format!("Confirmar la reunión con {name} un día antes"));
        }
        (processes::SEGUIMIENTO_PROPUESTAS, "draft") => {
            nudges.push(format!("La propuesta para {name} sigue en borrador: revisar y enviar"));
        }
        (processes::SEGUIMIENTO_PROPUESTAS, "sent" | "viewed") => {
            nudges.push(format!("Hacer seguimiento de la propuesta enviada a {name}"));
            if pressing {
                nudges.push(format!("Llamar a {name} para resolver dudas sobre honorarios"));
            }
        }
        (processes::CONTRATO_MANDATO, "sent_for_signature" | "pending_signature") => {
            nudges.push(format!("Recordar a {name} la firma del contrato de mandato"));
        }
        (processes::DOCUMENTOS_NOTARIALES, "observed") => {
            nudges.push(format!("Corregir las observaciones de la notaría para {name}"));
        }
        (processes::DOCUMENTOS_NOTARIALES, "awaiting_signature") => {
            nudges.push(format!("Coordinar con la notaría la firma de {name}"));
        }
        (processes::RESPUESTA_CORREOS, "new") => {
            nudges.push(format!("Clasificar el correo \"{name}\" y asignar responsable"));
        }
        (processes::RESPUESTA_CORREOS, "sent") => {
            nudges.push(format!(
                "Confirmar que el cliente recibió la respuesta a \"{name}\""
            ));
        }
        (processes::RESPUESTA_CORREOS, "sla_breached_24h" | "sla_breached_48h") => {
            nudges.push(format!(
                "El correo \"{name}\" superó el SLA de respuesta: responder de inmediato"
            ));
        }
        (processes::PROCESO_COBRANZA, "overdue") => {
            nudges.push(format!("La factura de {name} está vencida: enviar carta de cobranza"));
        }
        (processes::PROCESO_COBRANZA, "escalated") => {
            nudges.push(format!("Preparar carta de cese de servicios para {name}"));
        }
        (processes::FILTRO_CAUSAS, "new") => {
            nudges.push(format!("Revisar el estado procesal de {name}"));
        }
        (processes::REVISION_CASOS, "changes_requested") => {
            nudges.push(format!("Ajustar la estrategia de {name} según lo acordado con el socio"));
        }
        (processes::SCRAPER_EXTERNO, "failed") => {
            nudges.push("La ejecución del scraper falló: revisar credenciales y reintentar".to_string());
        }
        _ => {}
    }

    if nudges.is_empty() && urgency.is_urgent() {
        nudges.push(format!("{name} requiere atención urgente"));
    }

    nudges
}
