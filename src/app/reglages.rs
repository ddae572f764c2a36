//! src/app/reglages.rs
//!
//! Réglages utilisateur (fichier TOML facultatif).
//!
//! Emplacement : `<config_dir>/calculatrice-sci/reglages.toml`
//!
//! ```toml
//! decimales = 10                  # 0..=15
//! shift = "apres_fonction"        # ou "apres_chaque_touche"
//! journal = "info"                # filtre tracing si RUST_LOG absent
//! largeur = 380.0
//! hauteur = 560.0
//! ```
//!
//! Un fichier absent donne les valeurs par défaut ; un fichier illisible remonte
//! une ErreurReglages que main.rs journalise avant de repartir des défauts.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::DECIMALES_DEFAUT;

use super::composition::PolitiqueShift;

/// Au-delà, les décimales affichées ne sont que du bruit f64.
const DECIMALES_MAX: u32 = 15;

const DOSSIER: &str = "calculatrice-sci";
const FICHIER: &str = "reglages.toml";

#[derive(Error, Debug)]
pub enum ErreurReglages {
    #[error("lecture de {chemin} impossible")]
    Io {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("réglages TOML invalides")]
    Toml(#[source] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub decimales: u32,
    pub shift: PolitiqueShift,
    pub journal: String,
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
            shift: PolitiqueShift::default(),
            journal: "info".to_string(),
            largeur: 380.0,
            hauteur: 560.0,
        }
    }
}

impl Reglages {
    /// Analyse un contenu TOML (clés absentes => défaut), puis borne les valeurs.
    pub fn depuis_toml(contenu: &str) -> Result<Self, ErreurReglages> {
        let r: Reglages = toml::from_str(contenu).map_err(ErreurReglages::Toml)?;
        Ok(r.bornes())
    }

    /// Fichier absent => défaut ; autre échec => erreur.
    pub fn depuis_fichier(chemin: &Path) -> Result<Self, ErreurReglages> {
        match std::fs::read_to_string(chemin) {
            Ok(contenu) => Self::depuis_toml(&contenu),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ErreurReglages::Io {
                chemin: chemin.to_path_buf(),
                source,
            }),
        }
    }

    pub fn chemin_par_defaut() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(DOSSIER).join(FICHIER))
    }

    /// Chargement au démarrage : pas de dossier ni de fichier => défaut.
    pub fn charger() -> Result<Self, ErreurReglages> {
        match Self::chemin_par_defaut() {
            Some(chemin) => Self::depuis_fichier(&chemin),
            None => Ok(Self::default()),
        }
    }

    fn bornes(mut self) -> Self {
        self.decimales = self.decimales.min(DECIMALES_MAX);
        self.largeur = self.largeur.max(280.0);
        self.hauteur = self.hauteur.max(420.0);
        self
    }
}
