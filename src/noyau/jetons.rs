// src/noyau/jetons.rs

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurEval;

/// Opérateurs binaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
}

/// Fonctions unaires (toutes postfixées en RPN).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fonction {
    Log,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Ln,
    Asin,
    Acos,
    Atan,
    Exp,
    Abs,
    Fact,
    Reciprocal,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // Texte littéral d’origine : la conversion en f64 se fait à l’évaluation.
    Num(String),
    Op(Op),
    Fonc(Fonction),

    LPar,
    RPar,
}

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Caret => '^',
        }
    }

    fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '^' => Some(Op::Caret),
            _ => None,
        }
    }
}

impl FromStr for Op {
    type Err = ErreurEval;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut it = s.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => {
                Op::depuis_char(c).ok_or_else(|| ErreurEval::UnknownOperator(s.to_string()))
            }
            _ => Err(ErreurEval::UnknownOperator(s.to_string())),
        }
    }
}

impl Fonction {
    pub const TOUTES: [Fonction; 13] = [
        Fonction::Log,
        Fonction::Sqrt,
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Ln,
        Fonction::Asin,
        Fonction::Acos,
        Fonction::Atan,
        Fonction::Exp,
        Fonction::Abs,
        Fonction::Fact,
        Fonction::Reciprocal,
    ];

    /// Nom canonique (celui que la composition insère dans l’affichage).
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Log => "log",
            Fonction::Sqrt => "sqrt",
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Ln => "ln",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Exp => "exp",
            Fonction::Abs => "abs",
            Fonction::Fact => "fact",
            Fonction::Reciprocal => "reciprocal",
        }
    }
}

impl fmt::Display for Fonction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

impl FromStr for Fonction {
    type Err = ErreurEval;

    /// Accepte les noms canoniques et les graphies héritées (√, e^x, 1/x).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NOMS_FONCTIONS
            .iter()
            .find(|(nom, _)| *nom == s)
            .map(|(_, f)| *f)
            .ok_or_else(|| ErreurEval::UnknownFunction(s.to_string()))
    }
}

/// Table fixe des noms reconnus par le tokenizer.
/// Graphies héritées : "√" (racine), "e^x" (exp), "1/x" (inverse).
const NOMS_FONCTIONS: [(&str, Fonction); 16] = [
    ("log", Fonction::Log),
    ("sqrt", Fonction::Sqrt),
    ("sin", Fonction::Sin),
    ("cos", Fonction::Cos),
    ("tan", Fonction::Tan),
    ("ln", Fonction::Ln),
    ("asin", Fonction::Asin),
    ("acos", Fonction::Acos),
    ("atan", Fonction::Atan),
    ("exp", Fonction::Exp),
    ("abs", Fonction::Abs),
    ("fact", Fonction::Fact),
    ("reciprocal", Fonction::Reciprocal),
    ("√", Fonction::Sqrt),
    ("e^x", Fonction::Exp),
    ("1/x", Fonction::Reciprocal),
];

/// Plus long nom de fonction qui commence `reste`.
fn fonction_en_tete(reste: &str) -> Option<(&'static str, Fonction)> {
    NOMS_FONCTIONS
        .iter()
        .filter(|(nom, _)| reste.starts_with(nom))
        .max_by_key(|(nom, _)| nom.len())
        .copied()
}

fn vider_nombre(courant: &mut String, out: &mut Vec<Tok>) {
    if !courant.is_empty() {
        out.push(Tok::Num(std::mem::take(courant)));
    }
}

/// Début d’expression, après un opérateur, une fonction ou "(".
fn attend_operande(precedent: Option<&Tok>) -> bool {
    matches!(
        precedent,
        None | Some(Tok::Op(_) | Tok::Fonc(_) | Tok::LPar)
    )
}

fn debute_nombre(reste: &str) -> bool {
    reste
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.')
}

/// Tokenize une chaîne en jetons. N’échoue jamais.
/// - noms de fonctions (plus long nom reconnu à la position courante)
/// - nombres : suite de chiffres et de points, gardée telle quelle ("1.2.3" passe ici)
/// - "-" en position d’opérande et suivi d’un chiffre : signe du littéral ("-1").
///   Le signe appartient au nombre, il lie donc plus fort que ^ : "-2^2" = (-2)^2 = 4.
/// - opérateurs + - * / ^ et parenthèses ( )
/// - tout autre caractère (espaces compris) est ignoré
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let mut courant = String::new();
    let mut i: usize = 0;

    while i < s.len() {
        let reste = &s[i..];

        if let Some((nom, f)) = fonction_en_tete(reste) {
            vider_nombre(&mut courant, &mut out);
            out.push(Tok::Fonc(f));
            i += nom.len();
            continue;
        }

        // `reste` est non vide : i < s.len() et i toujours sur une frontière de char
        let Some(c) = reste.chars().next() else {
            break;
        };
        i += c.len_utf8();

        if c.is_ascii_digit() || c == '.' {
            courant.push(c);
            continue;
        }

        vider_nombre(&mut courant, &mut out);

        // signe d’un littéral : "-" en position d’opérande, collé à un chiffre
        // qui n’ouvre pas un nom de fonction ("-1/x" reste "- 1/x")
        if c == '-'
            && attend_operande(out.last())
            && debute_nombre(&s[i..])
            && fonction_en_tete(&s[i..]).is_none()
        {
            courant.push('-');
            continue;
        }

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            _ => {
                if let Some(op) = Op::depuis_char(c) {
                    out.push(Tok::Op(op));
                }
            }
        }
    }
    vider_nombre(&mut courant, &mut out);

    out
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(lit) => lit.clone(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::Fonc(f) => f.nom().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
