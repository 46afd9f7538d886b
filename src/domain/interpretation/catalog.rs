//! Built-in interpretation catalog.
//!
//! Stored overrides take precedence; these defaults answer any lookup the
//! admin panel has not customized yet. Texts are per karmic number and
//! shared across categories and variants.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Shown when a number has no default and no stored override.
pub const MISSING_TEXT: &str = "Interpretação ainda não cadastrada para este número.";

static DEFAULT_TEXTS: Lazy<HashMap<i32, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            1,
            "O número 1 marca o início de um ciclo. Representa liderança, \
             independência e a coragem de abrir caminhos próprios.",
        ),
        (
            2,
            "O número 2 fala de parceria e diplomacia. Pede paciência, \
             escuta e a construção de vínculos equilibrados.",
        ),
        (
            3,
            "O número 3 é expressão e criatividade. Comunicação, alegria e \
             sociabilidade são os dons a serem cultivados.",
        ),
        (
            4,
            "O número 4 traz estrutura e disciplina. Trabalho constante e \
             bases sólidas sustentam as conquistas deste caminho.",
        ),
        (
            5,
            "O número 5 é movimento e liberdade. Mudanças, viagens e \
             adaptabilidade definem as lições desta vibração.",
        ),
        (
            6,
            "O número 6 cuida do lar e das relações. Responsabilidade \
             afetiva e harmonia familiar pedem atenção especial.",
        ),
        (
            7,
            "O número 7 busca o conhecimento profundo. Introspecção, estudo \
             e vida espiritual iluminam esta jornada.",
        ),
        (
            8,
            "O número 8 rege o poder material. Ambição, justiça e o uso \
             ético dos recursos são os desafios centrais.",
        ),
        (
            9,
            "O número 9 encerra ciclos. Compaixão, desapego e serviço ao \
             coletivo completam as lições acumuladas.",
        ),
        (
            11,
            "O mestre 11 é intuição elevada. Sensibilidade aguçada e \
             inspiração espiritual pedem canalização consciente.",
        ),
        (
            22,
            "O mestre 22 é o construtor. Capacidade de materializar grandes \
             projetos a serviço de muitos.",
        ),
        (
            33,
            "O mestre 33 é o amor que ensina. Cura, orientação e doação \
             desinteressada marcam esta vibração rara.",
        ),
        (
            44,
            "O mestre 44 é a disciplina superior. Força para sustentar \
             estruturas duradouras com propósito elevado.",
        ),
    ])
});

/// Returns the built-in text for a karmic number, if one exists.
pub fn default_text(number: i32) -> Option<&'static str> {
    DEFAULT_TEXTS.get(&number).copied()
}
