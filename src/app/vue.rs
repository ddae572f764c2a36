// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Affichage en lecture seule : toute saisie passe par Touche (boutons ou clavier)
// - Boutons de fonctions : libellé = fonction effectivement insérée (Shift compris)
// - Panneau “Démarche” : jetons + RPN de la dernière évaluation

use eframe::egui;

use crate::noyau::{Fonction, Op};

use super::composition::{seconde_fonction, Touche};
use super::etat::AppCalc;

const TAILLE_BOUTON: [f32; 2] = [56.0, 32.0];

/// Grille des fonctions, Shift résolu à l’affichage.
const GRILLE_FONCTIONS: [[Fonction; 4]; 2] = [
    [Fonction::Sin, Fonction::Cos, Fonction::Tan, Fonction::Log],
    [Fonction::Abs, Fonction::Fact, Fonction::Reciprocal, Fonction::Sqrt],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_affichage(ui);

                ui.add_space(8.0);

                self.ui_fonctions(ui);
                ui.add_space(4.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();

                self.ui_demarche(ui);
            });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let texte = if self.affichage().is_empty() {
            "0"
        } else {
            self.affichage()
        };
        Self::champ_monospace(ui, "affichage", texte, 1);

        ui.horizontal(|ui| {
            if self.shift_actif() {
                ui.colored_label(ui.visuals().warn_fg_color, "SHIFT");
            }
            if !self.expression.is_empty() {
                ui.weak(format!("{} =", self.expression));
            }
        });

        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("grille_fonctions")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, ligne) in GRILLE_FONCTIONS.iter().enumerate() {
                    if i == 0 {
                        let libelle = if self.shift_actif() {
                            "Shift (ON)"
                        } else {
                            "Shift"
                        };
                        self.bouton(ui, libelle, "2nde fonction", Touche::Shift);
                    } else {
                        self.bouton(ui, "π", "π ≈ 3.141592653", Touche::Pi);
                    }

                    for f in ligne {
                        let affichee = self.composeur.shift.resoudre(*f);
                        let tip = format!("Shift : {}", seconde_fonction(affichee));
                        self.bouton(ui, affichee.nom(), &tip, Touche::Fonction(*f));
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let lignes: [[(&str, Touche); 5]; 4] = [
            [
                ("7", Touche::Chiffre('7')),
                ("8", Touche::Chiffre('8')),
                ("9", Touche::Chiffre('9')),
                ("/", Touche::Op(Op::Slash)),
                ("DEL", Touche::Supprimer),
            ],
            [
                ("4", Touche::Chiffre('4')),
                ("5", Touche::Chiffre('5')),
                ("6", Touche::Chiffre('6')),
                ("*", Touche::Op(Op::Star)),
                ("C", Touche::Effacer),
            ],
            [
                ("1", Touche::Chiffre('1')),
                ("2", Touche::Chiffre('2')),
                ("3", Touche::Chiffre('3')),
                ("-", Touche::Op(Op::Minus)),
                ("(", Touche::ParG),
            ],
            [
                ("0", Touche::Chiffre('0')),
                (".", Touche::Point),
                ("^", Touche::Op(Op::Caret)),
                ("+", Touche::Op(Op::Plus)),
                (")", Touche::ParD),
            ],
        ];

        egui::Grid::new("pave_numerique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in lignes {
                    for (libelle, touche) in ligne {
                        self.bouton(ui, libelle, "", touche);
                    }
                    ui.end_row();
                }

                self.bouton(ui, "e", "e ≈ 2.718281828", Touche::E);
                let ac = ui
                    .add_sized(TAILLE_BOUTON, egui::Button::new("AC"))
                    .on_hover_text("Remise à zéro totale (entrée + Shift)");
                if ac.clicked() {
                    self.reset_total();
                }
                ui.label("");
                ui.label("");
                self.bouton(ui, "=", "Évaluer (Enter)", Touche::Egal);
                ui.end_row();
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let mut resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
        if !tip.is_empty() {
            resp = resp.on_hover_text(tip);
        }
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
