//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (affichage, résultat, erreur, démarche)
//! et relier la composition au noyau.
//!
//! Contrats :
//! - Le noyau est appelé seulement sur `=` (ou Enter).
//! - Une erreur ne détruit pas l’entrée : on l’affiche, on la journalise, c’est tout.

use crate::noyau::{calculer, demarche, Demarche, ErreurEval};

use super::composition::{Commande, Composeur, Touche};
use super::reglages::Reglages;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub composeur: Composeur,

    // --- sorties ---
    pub expression: String, // dernière expression évaluée avec succès
    pub erreur: String,     // message d’erreur (si l’évaluation échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub reglages: Reglages,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            composeur: Composeur::new(reglages.shift),
            expression: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            reglages,
        }
    }

    /// Texte affiché (tampon de composition).
    pub fn affichage(&self) -> &str {
        &self.composeur.tampon
    }

    pub fn shift_actif(&self) -> bool {
        self.composeur.shift.actif
    }

    /* ------------------------ Actions “touches” ------------------------ */

    /// Point d’entrée unique des boutons et du clavier.
    pub fn appuyer(&mut self, t: Touche) {
        if t == Touche::Effacer {
            self.clear_resultats();
        }
        if let Some(Commande::Evaluer) = self.composeur.appuyer(t) {
            self.evaluer();
        }
    }

    /// AC : remise à zéro totale (entrée + résultats + Shift).
    pub fn reset_total(&mut self) {
        self.composeur = Composeur::new(self.reglages.shift);
        self.clear_resultats();
    }

    /// Efface résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.expression.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
    }

    /// Place une erreur ; l’entrée reste telle quelle pour être corrigée.
    pub fn set_erreur(&mut self, e: &ErreurEval) {
        self.erreur = format!("Erreur : {e}");
        self.demarche = Demarche::default();
    }

    /// Dépose un résultat : l’affichage est remplacé par le texte arrondi.
    pub fn set_resultat(&mut self, texte: String, demarche: Demarche) {
        self.erreur.clear();
        self.expression = std::mem::take(&mut self.composeur.tampon);
        self.composeur.remplacer(texte);
        self.demarche = demarche;
    }

    /// Évalue l’affichage via le noyau. Affichage vide => rien.
    pub fn evaluer(&mut self) {
        let s = self.composeur.tampon.trim();
        if s.is_empty() {
            return;
        }

        match calculer(s, self.reglages.decimales) {
            Ok(texte) => {
                let d = demarche(s);
                tracing::debug!(expr = s, resultat = %texte, rpn = %d.rpn, "évaluation");
                self.set_resultat(texte, d);
            }
            Err(e) => {
                tracing::warn!(expr = s, erreur = %e, "évaluation échouée");
                self.set_erreur(&e);
            }
        }
    }
}
