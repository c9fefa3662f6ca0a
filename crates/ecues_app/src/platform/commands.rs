//! Line-oriented command grammar for the terminal shell.
use ecues_core::{
    AllocationMode, AllocationRowView, AppViewModel, AuxCounter, Axis, Category, Channel, Delta,
    HospitalCatalog, IncidentField, Msg, SituationField,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Show,
    Catalog,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Comando desconocido: {0}. Escriba \"help\".")]
    Unknown(String),
    #[error("Falta el texto para {0}.")]
    MissingText(&'static str),
    #[error("Destino {0} inexistente.")]
    NoSuchDestination(usize),
    #[error("Uso: {0}")]
    Usage(&'static str),
}

pub const HELP_TEXT: &str = "\
Pacientes:   +a -a (atendidos)  +t -t (trasladados)
Clasificar:  +m -m  +f -f  +menor -menor  +mayor -mayor
S/D:         -sds +sds (sexo)  -sde +sde (edad)
Operativo:   +obito +evac +movil +aereo (y sus formas con -)
Destinos:    dest add | dest rm N | dest N name TEXTO|INDICE
             dest N catalog | dest N + | dest N - | dest N CANTIDAD
Datos:       set incidente|direccion|intervencion|notas TEXTO
METHANE:     methane m|e|t|h|a|n|e2 TEXTO
Acciones:    final  copy  share  export  reset  show  hospitales  help  quit";

const DEST_USAGE: &str = "dest add | dest rm N | dest N name|catalog|+|-|CANTIDAD";
const SET_USAGE: &str = "set incidente|direccion|intervencion|notas TEXTO";
const METHANE_USAGE: &str = "methane m|e|t|h|a|n|e2 TEXTO";

/// Parses one input line. Blank lines re-render the panel.
pub fn parse(
    line: &str,
    view: &AppViewModel,
    catalog: &HospitalCatalog,
) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Show);
    }
    let (head, rest) = split_word(line);

    if let Some(msg) = parse_counter(head) {
        return Ok(Command::Dispatch(msg));
    }

    let msg = match head.to_lowercase().as_str() {
        "help" | "ayuda" | "?" => return Ok(Command::Help),
        "show" | "ver" => return Ok(Command::Show),
        "hospitales" => return Ok(Command::Catalog),
        "quit" | "salir" | "exit" => return Ok(Command::Quit),
        "final" => Msg::FinalToggled,
        "copy" | "copiar" => Msg::CopyClicked,
        "share" | "compartir" => Msg::ShareClicked,
        "export" | "exportar" => Msg::ExportClicked,
        "reset" | "reiniciar" => Msg::ResetClicked,
        "dest" => parse_dest(rest, view, catalog)?,
        "set" => parse_set(rest)?,
        "methane" => parse_methane(rest)?,
        _ => return Err(CommandError::Unknown(head.to_string())),
    };
    Ok(Command::Dispatch(msg))
}

fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (text, ""),
    }
}

fn parse_counter(token: &str) -> Option<Msg> {
    let (delta, name) = if let Some(name) = token.strip_prefix('+') {
        (Delta::Increment, name)
    } else if let Some(name) = token.strip_prefix('-') {
        (Delta::Decrement, name)
    } else {
        return None;
    };

    let msg = match name.to_lowercase().as_str() {
        "a" => Msg::PatientEvent {
            channel: Channel::Attended,
            delta,
        },
        "t" => Msg::PatientEvent {
            channel: Channel::Transported,
            delta,
        },
        "m" => Msg::Reclassify {
            category: Category::Male,
            delta,
        },
        "f" => Msg::Reclassify {
            category: Category::Female,
            delta,
        },
        "menor" => Msg::Reclassify {
            category: Category::Minors,
            delta,
        },
        "mayor" => Msg::Reclassify {
            category: Category::Adults,
            delta,
        },
        "sds" => Msg::UnknownAdjusted {
            axis: Axis::Sex,
            delta,
        },
        "sde" => Msg::UnknownAdjusted {
            axis: Axis::Age,
            delta,
        },
        "obito" => aux(AuxCounter::Deceased, delta),
        "evac" => aux(AuxCounter::Evacuated, delta),
        "movil" => aux(AuxCounter::MobileUnits, delta),
        "aereo" => aux(AuxCounter::AirUnits, delta),
        _ => return None,
    };
    Some(msg)
}

fn aux(counter: AuxCounter, delta: Delta) -> Msg {
    Msg::AuxiliaryAdjusted { counter, delta }
}

fn parse_dest(
    rest: &str,
    view: &AppViewModel,
    catalog: &HospitalCatalog,
) -> Result<Msg, CommandError> {
    let (first, rest) = split_word(rest);
    match first {
        "add" => return Ok(Msg::AllocationAdded),
        "rm" => {
            let row = lookup_row(rest, view)?;
            return Ok(Msg::AllocationRemoved { id: row.id });
        }
        _ => {}
    }

    let row = lookup_row(first, view)?;
    let (action, argument) = split_word(rest);
    match action {
        "name" | "nombre" => {
            if argument.is_empty() {
                return Err(CommandError::MissingText("el destino"));
            }
            // Custom records take the text verbatim, digits included.
            let name = match row.mode {
                AllocationMode::Custom => argument,
                AllocationMode::Catalog => argument
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| catalog.option(index))
                    .unwrap_or(argument),
            };
            Ok(Msg::AllocationNameSet {
                id: row.id,
                name: name.to_string(),
            })
        }
        "catalog" | "lista" => Ok(Msg::AllocationReverted { id: row.id }),
        "+" => Ok(Msg::AllocationCountSet {
            id: row.id,
            count: row.count.saturating_add(1),
        }),
        "-" => Ok(Msg::AllocationCountSet {
            id: row.id,
            count: row.count.saturating_sub(1),
        }),
        other => match other.parse::<u32>() {
            Ok(count) => Ok(Msg::AllocationCountSet { id: row.id, count }),
            Err(_) => Err(CommandError::Usage(DEST_USAGE)),
        },
    }
}

fn lookup_row<'a>(
    token: &str,
    view: &'a AppViewModel,
) -> Result<&'a AllocationRowView, CommandError> {
    let position = token
        .parse::<usize>()
        .map_err(|_| CommandError::Usage(DEST_USAGE))?;
    view.allocation_at(position)
        .ok_or(CommandError::NoSuchDestination(position))
}

fn parse_set(rest: &str) -> Result<Msg, CommandError> {
    let (key, text) = split_word(rest);
    let field = match key.to_lowercase().as_str() {
        "incidente" => IncidentField::Description,
        "direccion" => IncidentField::Address,
        "intervencion" => IncidentField::Intervention,
        "notas" => IncidentField::Notes,
        _ => return Err(CommandError::Usage(SET_USAGE)),
    };
    Ok(Msg::IncidentEdited {
        field,
        text: text.to_string(),
    })
}

fn parse_methane(rest: &str) -> Result<Msg, CommandError> {
    let (key, text) = split_word(rest);
    let field = match key.to_lowercase().as_str() {
        "m" => SituationField::MajorIncident,
        "e" => SituationField::ExactLocation,
        "t" => SituationField::IncidentType,
        "h" => SituationField::Hazards,
        "a" => SituationField::Access,
        "n" => SituationField::Casualties,
        "e2" => SituationField::EmergencyServices,
        _ => return Err(CommandError::Usage(METHANE_USAGE)),
    };
    Ok(Msg::SituationEdited {
        field,
        text: text.to_string(),
    })
}
