//! src/app/composition.rs
//!
//! Composition de l’entrée (sans vue, sans évaluation).
//!
//! Rôle : transformer des touches (boutons ou clavier) en texte d’affichage.
//! Le mode Shift (2nde fonction) vit ici, explicitement, pas dans le noyau.
//!
//! Paires Shift : sin↔asin, cos↔acos, tan↔atan, log↔exp, abs↔sqrt, fact↔ln.

use serde::Deserialize;

use crate::noyau::{Fonction, Op};

/// π et e tels que l’affichage les reçoit (11 premiers caractères).
pub const TEXTE_PI: &str = "3.141592653";
pub const TEXTE_E: &str = "2.718281828";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Op(Op),
    ParG,
    ParD,
    Fonction(Fonction),
    Shift,
    Pi,
    E,
    Egal,
    Effacer,
    Supprimer,
}

/// Ce que la composition demande à l’état (au-delà d’éditer le tampon).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Evaluer,
}

/// Quand le Shift retombe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolitiqueShift {
    /// Après la sélection d’une fonction (comportement historique).
    #[default]
    ApresFonction,
    /// Après n’importe quelle touche autre que Shift.
    ApresChaqueTouche,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeShift {
    pub actif: bool,
}

impl ModeShift {
    pub fn basculer(&mut self) {
        self.actif = !self.actif;
    }

    /// Fonction effectivement choisie pour un bouton `f`.
    pub fn resoudre(self, f: Fonction) -> Fonction {
        if self.actif {
            seconde_fonction(f)
        } else {
            f
        }
    }
}

/// Table fixe des 2ndes fonctions (symétrique, identité hors paires).
pub fn seconde_fonction(f: Fonction) -> Fonction {
    use Fonction::*;
    match f {
        Sin => Asin,
        Asin => Sin,
        Cos => Acos,
        Acos => Cos,
        Tan => Atan,
        Atan => Tan,
        Log => Exp,
        Exp => Log,
        Abs => Sqrt,
        Sqrt => Abs,
        Fact => Ln,
        Ln => Fact,
        Reciprocal => Reciprocal,
    }
}

/// Texte clavier -> touche (chiffres, opérateurs, raccourcis p/e/s/l).
pub fn touche_depuis_texte(txt: &str) -> Option<Touche> {
    let mut it = txt.chars();
    let (Some(c), None) = (it.next(), it.next()) else {
        return None;
    };

    match c {
        '0'..='9' => Some(Touche::Chiffre(c)),
        '.' => Some(Touche::Point),
        '(' => Some(Touche::ParG),
        ')' => Some(Touche::ParD),
        '=' => Some(Touche::Egal),
        'p' | 'P' => Some(Touche::Pi),
        'e' | 'E' => Some(Touche::E),
        's' | 'S' => Some(Touche::Fonction(Fonction::Sin)),
        'l' | 'L' => Some(Touche::Fonction(Fonction::Log)),
        _ => c.to_string().parse::<Op>().ok().map(Touche::Op),
    }
}

#[derive(Clone, Debug, Default)]
pub struct Composeur {
    pub tampon: String,
    pub shift: ModeShift,
    pub politique: PolitiqueShift,
}

impl Composeur {
    pub fn new(politique: PolitiqueShift) -> Self {
        Self {
            politique,
            ..Self::default()
        }
    }

    /// Applique une touche au tampon. Retourne une commande pour `=`.
    pub fn appuyer(&mut self, t: Touche) -> Option<Commande> {
        let mut commande = None;

        match t {
            Touche::Shift => {
                self.shift.basculer();
                return None;
            }
            Touche::Chiffre(c) => self.tampon.push(c),
            Touche::Point => self.tampon.push('.'),
            Touche::Op(op) => self.tampon.push(op.symbole()),
            Touche::ParG => self.tampon.push('('),
            Touche::ParD => self.tampon.push(')'),
            Touche::Pi => self.tampon.push_str(TEXTE_PI),
            Touche::E => self.tampon.push_str(TEXTE_E),
            Touche::Fonction(f) => {
                let choisie = self.shift.resoudre(f);
                self.tampon.push_str(choisie.nom());
                self.shift.actif = false;
            }
            Touche::Egal => commande = Some(Commande::Evaluer),
            Touche::Effacer => self.tampon.clear(),
            Touche::Supprimer => self.supprimer(),
        }

        if self.politique == PolitiqueShift::ApresChaqueTouche {
            self.shift.actif = false;
        }
        commande
    }

    /// Backspace “intelligent” : retire d’un coup un nom de fonction final.
    fn supprimer(&mut self) {
        let fin = Fonction::TOUTES
            .iter()
            .map(|f| f.nom())
            .filter(|nom| self.tampon.ends_with(nom))
            .map(str::len)
            .max();

        match fin {
            Some(n) => self.tampon.truncate(self.tampon.len() - n),
            None => {
                self.tampon.pop();
            }
        }
    }

    /// Remplace le tampon (ex. par le résultat affiché).
    pub fn remplacer(&mut self, texte: impl Into<String>) {
        self.tampon = texte.into();
    }
}
