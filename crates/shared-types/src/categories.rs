//! Closed canonical value sets used by the agreement-management import.
//!
//! Every categorical field of an extracted record holds one of these values.
//! The serialized form of each variant is the exact label the importer expects
//! (for example `"Acuerdo Cooperacion"` or `"Rector/a"`).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A label that is not part of the requested value set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownCategory {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! canonical_values {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $($variant:ident => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every value of the set, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Canonical import label
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str() == s)
                    .ok_or_else(|| UnknownCategory {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

canonical_values! {
    /// Agreement type (`tipo_convenio`)
    TipoConvenio as "agreement type" {
        ActaAcuerdo => "Acta Acuerdo",
        ActaComplemento => "Acta Complemento",
        ActaCompromiso => "Acta Compromiso",
        ActaEspecifica => "Acta Especifica",
        Acuerdo => "Acuerdo",
        AcuerdoComplementario => "Acuerdo Complementario",
        AcuerdoCooperacion => "Acuerdo Cooperacion",
        AcuerdoEspecifico => "Acuerdo Especifico",
        AcuerdoInvestigacion => "Acuerdo Investigacion",
        Adenda => "Adenda",
        Adhesion => "Adhesion",
        Anexo => "Anexo",
        ComisionDeEstudio => "Comision de Estudio",
        CartaIntencion => "Carta Intencion",
        Especifico => "Especifico",
        General => "General",
        Marco => "Marco",
        MarcoDeColaboracion => "Marco de Colaboracion",
        MarcoDeCooperacion => "Marco de Cooperacion",
        MarcoDeInvestigacion => "Marco de Investigacion",
        MarcoDeIntercambio => "Marco de Intercambio",
        MarcoDeIntercambioDeAlumnos => "Marco de Intercambio de Alumnos",
        MarcoDePasantias => "Marco de Pasantias",
        Memorandum => "Memorandum",
        MemorandumDeEntendimiento => "Memorandum de Entendimiento",
        Pps => "PPS",
        Protocolo => "Protocolo",
        ProtocoloAdicional => "Protocolo Adicional",
        ProtocoloDeColaboracion => "Protocolo de Colaboracion",
        ProtocoloEspecifico => "Protocolo Especifico",
        ProtocoloDeInvestigacion => "Protocolo de Investigacion",
        Proyecto => "Proyecto",
        Subvencion => "Subvencion",
        TransferenciaTecnologica => "Transferencia Tecnologica",
    }
}

impl Default for TipoConvenio {
    fn default() -> Self {
        TipoConvenio::Marco
    }
}

canonical_values! {
    /// Institution type (`tipo` of an institution)
    TipoInstitucion as "institution type" {
        Agencia => "Agencia",
        Agremiacion => "Agremiacion",
        Asociacion => "Asociacion",
        Club => "Club",
        Educativa => "Educativa",
        Empresa => "Empresa",
        Ente => "Ente",
        Fundacion => "Fundacion",
        Gobierno => "Gobierno",
        Gubernamental => "Gubernamental",
        Investigadora => "Investigadora",
        Instituto => "Instituto",
        Nacional => "Nacional",
        Municipal => "Municipal",
        Salud => "Salud",
        Sindical => "Sindical",
        Social => "Social",
        Ong => "ONG",
        Universitaria => "Universitaria",
    }
}

impl Default for TipoInstitucion {
    fn default() -> Self {
        TipoInstitucion::Universitaria
    }
}

canonical_values! {
    /// Renewal type (`tipo_renovacion`). Has no default: absent means empty.
    TipoRenovacion as "renewal type" {
        PartesIguales => "Partes Iguales",
        Escalera => "Escalera",
        Unica => "Unica",
        SinRenovacion => "Sin Renovacion",
        RenovableDeComunAcuerdo => "Renovable de Comun Acuerdo",
    }
}

canonical_values! {
    /// Signer title (`cargo`)
    Cargo as "signer title" {
        Rector => "Rector/a",
        Vicerrector => "Vicerrector/a",
        Secretario => "Secretario/a",
        Coordinador => "Coordinador/a",
        Decano => "Decano/a",
        Vicedecano => "Vicedecano/a",
        Director => "Director/a",
        Investigador => "Investigador/a",
    }
}

impl Default for Cargo {
    fn default() -> Self {
        Cargo::Rector
    }
}
