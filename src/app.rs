// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (composition, etat, reglages, vue)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier global : l’affichage n’est pas un champ texte, tout passe par Touche

pub mod composition;
pub mod etat;
pub mod reglages;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;
pub use reglages::Reglages;

use eframe::egui;

use composition::{touche_depuis_texte, Touche};

/// Touches “nommées” (hors texte) -> Touche.
fn touche_depuis_cle(key: egui::Key) -> Option<Touche> {
    match key {
        egui::Key::Enter => Some(Touche::Egal),
        egui::Key::Escape => Some(Touche::Effacer),
        egui::Key::Backspace => Some(Touche::Supprimer),
        _ => None,
    }
}

/// Événements clavier de la frame, dans l’ordre.
fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|ev| match ev {
                egui::Event::Text(txt) => touche_depuis_texte(txt),
                egui::Event::Key {
                    key, pressed: true, ..
                } => touche_depuis_cle(*key),
                _ => None,
            })
            .collect()
    })
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for t in touches_clavier(ctx) {
            self.appuyer(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
