//! Built-in process graphs, one per business domain of the firm.
//!
//! Each graph comes paired with the status table that maps the raw status
//! strings written by the data layer onto its step ids. The tables are
//! hand-maintained: a status missing here resolves to the graph's first step.

use super::catalog::StatusTable;
use super::definition::{ProcessAgent, ProcessDefinition, ProcessStep};
use crate::constants::processes;

use super::definition::StepType::{Decision, End, Start, Subprocess, Task};

/// All built-in graphs with their status tables, in catalog order
pub fn builtin_processes() -> Vec<(ProcessDefinition, StatusTable)> {
    vec![
        captacion_visita(),
        captacion_telefono(),
        seguimiento_propuestas(),
        contrato_mandato(),
        documentos_notariales(),
        respuesta_correos(),
        proceso_cobranza(),
        filtro_causas(),
        revision_casos(),
        scraper_externo(),
    ]
}

fn definition(
    id: &str,
    name: &str,
    description: &str,
    agents: Vec<ProcessAgent>,
    steps: Vec<ProcessStep>,
) -> ProcessDefinition {
    ProcessDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        steps,
        agents,
    }
}

fn table(entries: &[(&str, &str)]) -> StatusTable {
    entries
        .iter()
        .map(|(status, step)| (status.to_string(), step.to_string()))
        .collect()
}

fn secretaria(id: &str) -> ProcessAgent {
    ProcessAgent::new(id, "Secretaria", "amber", "Registro, agenda y despacho de documentos")
}

fn abogado(id: &str) -> ProcessAgent {
    ProcessAgent::new(id, "Abogado", "blue", "Análisis jurídico y decisiones de fondo")
}

fn procurador(id: &str) -> ProcessAgent {
    ProcessAgent::new(id, "Procurador", "teal", "Gestiones ante tribunales, notarías y conservadores")
}

fn agente_ia(id: &str) -> ProcessAgent {
    ProcessAgent::new(id, "Agente IA", "cyan", "Clasificación y borradores automáticos")
}

fn captacion_visita() -> (ProcessDefinition, StatusTable) {
    let def = definition(
        processes::CAPTACION_VISITA,
        "Captación por Visita",
        "Cliente potencial que llega presencialmente a la oficina",
        vec![
            secretaria("recepcion"),
            abogado("abogado"),
            ProcessAgent::new("socio", "Socio", "violet", "Aprueba honorarios y estrategia"),
        ],
        vec![
            ProcessStep::new("inicio", Start, "recepcion", "Llegada del cliente")
                .describe("El cliente se presenta en recepción")
                .then("registro"),
            ProcessStep::new("registro", Task, "recepcion", "Registrar datos")
                .describe("Ficha de contacto y motivo de la consulta")
                .then("entrevista"),
            ProcessStep::new("entrevista", Task, "abogado", "Entrevista inicial")
                .describe("Reunión para entender los hechos del caso")
                .then("evaluacion"),
            ProcessStep::new("evaluacion", Decision, "abogado", "Evaluar viabilidad")
                .describe("¿El caso es viable para el estudio?")
                .branch("Viable", "propuesta")
                .branch("No viable", "descartado"),
            ProcessStep::new("propuesta", Subprocess, "socio", "Preparar propuesta")
                .describe("Deriva al seguimiento de propuestas")
                .then("fin"),
            ProcessStep::new("descartado", End, "abogado", "Caso descartado")
                .describe("Se informa al cliente que no se tomará el caso"),
            ProcessStep::new("fin", End, "socio", "Cliente captado")
                .describe("El lead pasa a cliente"),
        ],
    );
    let statuses = table(&[
        ("new", "registro"),
        ("registered", "registro"),
        ("scheduled", "entrevista"),
        ("interviewed", "evaluacion"),
        ("qualified", "propuesta"),
        ("proposal_sent", "propuesta"),
        ("converted", "fin"),
        ("discarded", "descartado"),
        ("lost", "descartado"),
    ]);
    (def, statuses)
}

fn captacion_telefono() -> (ProcessDefinition, StatusTable) {
    let def = definition(
        processes::CAPTACION_TELEFONO,
        "Captación Telefónica",
        "Consulta que ingresa por llamada telefónica",
        vec![secretaria("operadora"), abogado("abogado")],
        vec![
            ProcessStep::new("inicio", Start, "operadora", "Llamada entrante")
                .then("registro"),
            ProcessStep::new("registro", Task, "operadora", "Registrar llamada")
                .describe("Datos de contacto y resumen de la consulta")
                .then("calificacion"),
            ProcessStep::new("calificacion", Decision, "abogado", "Calificar consulta")
                .describe("¿Requiere asesoría del estudio?")
                .branch("Sí", "agendar")
                .branch("No", "descartado"),
            ProcessStep::new("agendar", Task, "operadora", "Agendar reunión")
                .describe("Coordinar visita o videollamada")
                .then("seguimiento"),
            ProcessStep::new("seguimiento", Task, "operadora", "Seguimiento telefónico")
                .describe("Confirmar asistencia y documentos a traer")
                .then("fin"),
            ProcessStep::new("descartado", End, "abogado", "Consulta descartada"),
            ProcessStep::new("fin", End, "abogado", "Reunión concretada"),
        ],
    );
    let statuses = table(&[
        ("new", "registro"),
        ("contacted", "calificacion"),
        ("qualified", "agendar"),
        ("meeting_scheduled", "seguimiento"),
        ("follow_up", "seguimiento"),
        ("converted", "fin"),
        ("lost", "descartado"),
        ("discarded", "descartado"),
    ]);
    (def, statuses)
}

fn seguimiento_propuestas() -> (ProcessDefinition, StatusTable) {
    let def = definition(
        processes::SEGUIMIENTO_PROPUESTAS,
        "Seguimiento de Propuestas",
        "Desde la redacción de la propuesta de honorarios hasta su aceptación",
        vec![
            abogado("abogado"),
            secretaria("secretaria"),
            ProcessAgent::new("cliente", "Cliente", "emerald", "Revisa y responde la propuesta"),
        ],
        vec![
            ProcessStep::new("inicio", Start, "abogado", "Solicitud de propuesta")
                .then("redaccion"),
            ProcessStep::new("redaccion", Task, "abogado", "Redactar propuesta")
                .describe("Alcance del servicio y honorarios")
                .then("envio"),
            ProcessStep::new("envio", Task, "secretaria", "Enviar propuesta")
                .describe("Despacho por correo con acuse de recibo")
                .then("seguimiento"),
            ProcessStep::new("seguimiento", Task, "secretaria", "Seguimiento")
                .describe("Recordatorios al cliente hasta obtener respuesta")
                .then("respuesta"),
            ProcessStep::new("respuesta", Decision, "cliente", "Respuesta del cliente")
                .describe("¿El cliente acepta la propuesta?")
                .branch("Acepta", "contrato")
                .branch("Rechaza", "rechazada"),
            ProcessStep::new("contrato", Subprocess, "abogado", "Generar contrato")
                .describe("Deriva al proceso de contrato de mandato")
                .then("fin"),
            ProcessStep::new("rechazada", End, "secretaria", "Propuesta rechazada"),
            ProcessStep::new("fin", End, "abogado", "Propuesta aceptada"),
        ],
    );
    let statuses = table(&[
        ("draft", "redaccion"),
        ("ready", "envio"),
        ("sent", "seguimiento"),
        ("viewed", "seguimiento"),
        ("negotiating", "respuesta"),
        ("accepted", "contrato"),
        ("rejected", "rechazada"),
        ("expired", "rechazada"),
    ]);
    (def, statuses)
}

fn contrato_mandato() -> (ProcessDefinition, StatusTable) {
    let def = definition(
        processes::CONTRATO_MANDATO,
        "Contrato de Mandato",
        "Redacción, firma y archivo del contrato de prestación de servicios",
        vec![
            abogado("abogado"),
            secretaria("secretaria"),
            ProcessAgent::new("cliente", "Cliente", "emerald", "Firma el mandato"),
        ],
        vec![
            ProcessStep::new("inicio", Start, "abogado", "Propuesta aceptada")
                .then("redaccion"),
            ProcessStep::new("redaccion", Task, "abogado", "Redactar contrato")
                .describe("Cláusulas según la propuesta aceptada")
                .then("revision"),
            ProcessStep::new("revision", Decision, "abogado", "Revisión interna")
                .describe("¿El borrador está listo para firma?")
                .branch("Aprobado", "envio_firma")
                .branch("Corregir", "redaccion"),
            ProcessStep::new("envio_firma", Task, "secretaria", "Enviar a firma")
                .describe("Firma electrónica o coordinación presencial")
                .then("firma_cliente"),
            ProcessStep::new("firma_cliente", Task, "cliente", "Firma del cliente")
                .branch("Firmado", "archivo")
                .branch("Desiste", "cancelado"),
            ProcessStep::new("archivo", Task, "secretaria", "Archivar contrato")
                .describe("Copia digital en la carpeta del cliente")
                .then("fin"),
            ProcessStep::new("cancelado", End, "secretaria", "Contrato cancelado"),
            ProcessStep::new("fin", End, "abogado", "Mandato vigente"),
        ],
    );
    let statuses = table(&[
        ("draft", "redaccion"),
        ("in_review", "revision"),
        ("sent_for_signature", "envio_firma"),
        ("pending_signature", "firma_cliente"),
        ("signed", "archivo"),
        ("active", "fin"),
        ("cancelled", "cancelado"),
    ]);
    (def, statuses)
}

fn documentos_notariales() -> (ProcessDefinition, StatusTable) {
    let def = definition(
        processes::DOCUMENTOS_NOTARIALES,
        "Documentos Notariales",
        "Escrituras y documentos que requieren notaría o inscripción",
        vec![
            abogado("abogado"),
            procurador("procurador"),
            ProcessAgent::new("notaria", "Notaría", "orange", "Revisión y firma ante notario"),
        ],
        vec![
            ProcessStep::new("inicio", Start, "abogado", "Solicitud de documento")
                .then("preparacion"),
            ProcessStep::new("preparacion", Task, "abogado", "Preparar documentos")
                .describe("Borrador de escritura y antecedentes")
                .then("revision"),
            ProcessStep::new("revision", Decision, "notaria", "Revisión de borrador")
                .describe("¿La notaría aprueba el borrador?")
                .branch("Aprobado", "ingreso")
                .branch("Observado", "preparacion"),
            ProcessStep::new("ingreso", Task, "procurador", "Ingreso a notaría")
                .then("firma"),
            ProcessStep::new("firma", Task, "notaria", "Firma ante notario")
                .describe("Comparecencia de las partes")
                .then("inscripcion"),
            ProcessStep::new("inscripcion", Subprocess, "procurador", "Inscripción")
                .describe("Inscripción en el Conservador cuando corresponde")
                .then("entrega"),
            ProcessStep::new("entrega", Task, "procurador", "Entrega al cliente")
                .describe("Copias autorizadas y certificados")
                .then("fin"),
            ProcessStep::new("fin", End, "abogado", "Trámite concluido"),
        ],
    );
    let statuses = table(&[
        ("pending", "preparacion"),
        ("draft", "preparacion"),
        ("in_review", "revision"),
        ("observed", "preparacion"),
        ("submitted", "ingreso"),
        ("awaiting_signature", "firma"),
        ("signed", "inscripcion"),
        ("registering", "inscripcion"),
        ("ready_for_delivery", "entrega"),
        ("delivered", "fin"),
        ("completed", "fin"),
    ]);
    (def, statuses)
}

fn respuesta_correos() -> (ProcessDefinition, StatusTable) {
    let def = definition(
        processes::RESPUESTA_CORREOS,
        "Respuesta de Correos",
        "Tickets de correo entrante con SLA de respuesta de 24 horas",
        vec![agente_ia("agente_ia"), secretaria("secretaria"), abogado("abogado")],
        vec![
            ProcessStep::new("inicio", Start, "agente_ia", "Correo recibido")
                .then("clasificacion"),
            ProcessStep::new("clasificacion", Task, "agente_ia", "Clasificar correo")
                .describe("Tema, cliente y prioridad")
                .then("borrador"),
            ProcessStep::new("borrador", Task, "agente_ia", "Redactar respuesta")
                .describe("Borrador automático para revisión humana")
                .then("revision"),
            ProcessStep::new("revision", Decision, "secretaria", "Revisar borrador")
                .describe("¿Requiere respuesta de un abogado?")
                .branch("Sí", "respuesta_abogado")
                .branch("No", "envio"),
            ProcessStep::new("respuesta_abogado", Task, "abogado", "Respuesta del abogado")
                .then("envio"),
            ProcessStep::new("envio", Task, "secretaria", "Enviar respuesta")
                .then("confirmacion"),
            ProcessStep::new("confirmacion", Task, "secretaria", "Confirmar recepción")
                .describe("Verificar que el cliente recibió la respuesta")
                .then("fin"),
            ProcessStep::new("fin", End, "secretaria", "Ticket cerrado"),
        ],
    );
    let statuses = table(&[
        ("new", "clasificacion"),
        ("classified", "borrador"),
        ("drafted", "revision"),
        ("pending_review", "revision"),
        ("escalated", "respuesta_abogado"),
        ("approved", "envio"),
        ("sent", "confirmacion"),
        ("closed", "fin"),
        ("resolved", "fin"),
    ]);
    (def, statuses)
}

fn proceso_cobranza() -> (ProcessDefinition, StatusTable) {
    let def = definition(
        processes::PROCESO_COBRANZA,
        "Proceso de Cobranza",
        "Facturación y recuperación de honorarios impagos",
        vec![
            secretaria("secretaria"),
            ProcessAgent::new("cobranza", "Ejecutivo de Cobranza", "rose", "Gestiona recordatorios y cartas"),
            abogado("abogado"),
        ],
        vec![
            ProcessStep::new("inicio", Start, "secretaria", "Factura emitida")
                .then("envio_factura"),
            ProcessStep::new("envio_factura", Task, "secretaria", "Enviar factura")
                .then("recordatorio"),
            ProcessStep::new("recordatorio", Task, "cobranza", "Recordatorio de pago")
                .describe("Aviso amistoso antes y después del vencimiento")
                .then("verificacion"),
            ProcessStep::new("verificacion", Decision, "cobranza", "Verificar pago")
                .describe("¿Se recibió el pago?")
                .branch("Pagado", "conciliacion")
                .branch("Impago", "carta_cobranza"),
            ProcessStep::new("carta_cobranza", Task, "cobranza", "Carta de cobranza")
                .describe("Requerimiento formal de pago")
                .then("cese"),
            ProcessStep::new("cese", Task, "abogado", "Carta de cese")
                .describe("Aviso de suspensión de servicios por no pago")
                .then("suspendido"),
            ProcessStep::new("conciliacion", Task, "secretaria", "Conciliar pago")
                .then("fin"),
            ProcessStep::new("suspendido", End, "abogado", "Servicios suspendidos"),
            ProcessStep::new("fin", End, "secretaria", "Pago conciliado"),
        ],
    );
    let statuses = table(&[
        ("pending", "envio_factura"),
        ("sent", "recordatorio"),
        ("reminded", "verificacion"),
        ("overdue", "carta_cobranza"),
        ("escalated", "cese"),
        ("paid", "conciliacion"),
        ("reconciled", "fin"),
        ("suspended", "suspendido"),
    ]);
    (def, statuses)
}

fn filtro_causas() -> (ProcessDefinition, StatusTable) {
    let def = definition(
        processes::FILTRO_CAUSAS,
        "Filtro de Causas",
        "Revisión de causas judiciales detectadas para decidir si requieren acción",
        vec![procurador("procurador"), abogado("abogado")],
        vec![
            ProcessStep::new("inicio", Start, "procurador", "Causa detectada")
                .then("revision"),
            ProcessStep::new("revision", Task, "procurador", "Revisar expediente")
                .describe("Estado procesal y últimas resoluciones")
                .then("analisis"),
            ProcessStep::new("analisis", Task, "abogado", "Analizar relevancia")
                .then("decision"),
            ProcessStep::new("decision", Decision, "abogado", "¿Requiere acción?")
                .branch("Sí", "asignacion")
                .branch("No", "archivada"),
            ProcessStep::new("asignacion", Task, "abogado", "Asignar responsable")
                .describe("Abogado a cargo y plazo de la gestión")
                .then("fin"),
            ProcessStep::new("archivada", End, "procurador", "Causa archivada"),
            ProcessStep::new("fin", End, "abogado", "Causa asignada"),
        ],
    );
    let statuses = table(&[
        ("new", "revision"),
        ("reviewing", "analisis"),
        ("pending_decision", "decision"),
        ("assigned", "asignacion"),
        ("closed", "fin"),
        ("archived", "archivada"),
        ("discarded", "archivada"),
    ]);
    (def, statuses)
}

fn revision_casos() -> (ProcessDefinition, StatusTable) {
    let def = definition(
        processes::REVISION_CASOS,
        "Revisión de Casos",
        "Revisión periódica de estrategia de los casos activos",
        vec![
            abogado("abogado"),
            ProcessAgent::new("socio", "Socio", "violet", "Supervisa la estrategia del caso"),
        ],
        vec![
            ProcessStep::new("inicio", Start, "abogado", "Revisión programada")
                .then("preparacion"),
            ProcessStep::new("preparacion", Task, "abogado", "Preparar resumen")
                .describe("Hitos, plazos y riesgos del caso")
                .then("revision_socio"),
            ProcessStep::new("revision_socio", Task, "socio", "Revisión con socio")
                .then("decision"),
            ProcessStep::new("decision", Decision, "socio", "¿Cambiar estrategia?")
                .branch("Sí", "ajuste")
                .branch("No", "registro"),
            ProcessStep::new("ajuste", Task, "abogado", "Ajustar estrategia")
                .then("revision_socio"),
            ProcessStep::new("registro", Task, "abogado", "Registrar acuerdos")
                .describe("Minuta de la revisión en la ficha del caso")
                .then("fin"),
            ProcessStep::new("fin", End, "abogado", "Revisión cerrada"),
        ],
    );
    let statuses = table(&[
        ("scheduled", "preparacion"),
        ("prepared", "revision_socio"),
        ("in_review", "revision_socio"),
        ("changes_requested", "ajuste"),
        ("approved", "registro"),
        ("completed", "fin"),
    ]);
    (def, statuses)
}

fn scraper_externo() -> (ProcessDefinition, StatusTable) {
    let def = definition(
        processes::SCRAPER_EXTERNO,
        "Scraper Externo",
        "Extracción automática de movimientos desde portales judiciales",
        vec![
            ProcessAgent::new("scraper", "Scraper", "gray", "Consulta los portales externos"),
            agente_ia("agente_ia"),
            procurador("procurador"),
        ],
        vec![
            ProcessStep::new("inicio", Start, "scraper", "Ejecución programada")
                .then("extraccion"),
            ProcessStep::new("extraccion", Task, "scraper", "Extraer causas")
                .then("normalizacion"),
            ProcessStep::new("normalizacion", Task, "agente_ia", "Normalizar datos")
                .describe("Unificar formatos y vincular con clientes")
                .then("deteccion"),
            ProcessStep::new("deteccion", Decision, "agente_ia", "Detectar movimientos")
                .describe("¿Hay movimientos nuevos?")
                .branch("Sí", "notificacion")
                .branch("No", "fin"),
            ProcessStep::new("notificacion", Task, "procurador", "Notificar movimientos")
                .then("fin"),
            ProcessStep::new("fin", End, "scraper", "Ejecución finalizada"),
        ],
    );
    let statuses = table(&[
        ("running", "extraccion"),
        ("failed", "extraccion"),
        ("processing", "normalizacion"),
        ("changes_detected", "deteccion"),
        ("notified", "notificacion"),
        ("completed", "fin"),
    ]);
    (def, statuses)
}
