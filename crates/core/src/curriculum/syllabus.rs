use crate::model::Level;

/// Fixed topic lists per level; catalog order within a level follows list
/// order. Totals: 30 + 30 + 25 + 15 = 100.
pub(crate) const SYLLABUS: [(Level, &[&str]); 4] = [
    (Level::Basic, BASIC_TOPICS),
    (Level::Intermediate, INTERMEDIATE_TOPICS),
    (Level::Advanced, ADVANCED_TOPICS),
    (Level::Fluent, FLUENT_TOPICS),
];

const BASIC_TOPICS: &[&str] = &[
    "Alfabeto e pronúncia",
    "Cumprimentos (Greetings)",
    "Verb to be",
    "Pronomes Pessoais",
    "Artigos (A/An/The)",
    "Demonstratives (This/That)",
    "Perguntas Simples (What/Where)",
    "Presente Simples (Affirmative)",
    "Presente Simples (Negative)",
    "Presente Simples (Questions)",
    "Vocabulário: Família",
    "Vocabulário: Comida",
    "Números 1-100",
    "Dias da Semana e Meses",
    "Adjetivos Básicos",
    "Preposições de Lugar (In/On/At)",
    "Possessivos (My/Your)",
    "There is / There are",
    "Can / Can't (Habilidade)",
    "Imperativo (Ordens)",
    "Present Continuous (Affirmative)",
    "Present Continuous (Negative)",
    "Roupas e Cores",
    "Horas (Telling Time)",
    "Verbos de Rotina",
    "Adverbs of Frequency",
    "Object Pronouns",
    "Wh- Questions",
    "Conjunctions (And/But/Or)",
    "Revisão Básico",
];

const INTERMEDIATE_TOPICS: &[&str] = &[
    "Past Simple (Regular Verbs)",
    "Past Simple (Irregular Verbs)",
    "Past Simple (Questions)",
    "Future with 'Going to'",
    "Future with 'Will'",
    "Comparatives",
    "Superlatives",
    "Countable Nouns",
    "Uncountable Nouns",
    "Quantifiers (Some/Any)",
    "How much / How many",
    "Prepositions of Time",
    "Prepositions of Movement",
    "Modal Verbs (Should/Must)",
    "Past Continuous",
    "Daily Routines Advanced",
    "Shopping & Money",
    "Health & Body",
    "Directions & Travel",
    "Small Talk Basics",
    "Ordering in a Restaurant",
    "Describing People",
    "Feelings & Emotions",
    "Weather & Seasons",
    "Technology Vocabulary",
    "Movies & Music",
    "Email Writing Basics",
    "Telephone English",
    "Making Appointments",
    "Revisão Intermediário",
];

const ADVANCED_TOPICS: &[&str] = &[
    "Present Perfect (Introduction)",
    "Present Perfect vs Past Simple",
    "Present Perfect (Ever/Never)",
    "Present Perfect (For/Since)",
    "First Conditional",
    "Second Conditional",
    "Third Conditional",
    "Passive Voice (Present)",
    "Passive Voice (Past)",
    "Reported Speech (Statements)",
    "Reported Speech (Questions)",
    "Phrasal Verbs (Separable)",
    "Phrasal Verbs (Inseparable)",
    "Relative Clauses (Who/Which)",
    "Modals of Deduction",
    "Used to / Would",
    "Future Continuous",
    "Future Perfect",
    "Gerunds vs Infinitives",
    "Idioms: Business",
    "Idioms: Social",
    "Suffixes & Prefixes",
    "Formal vs Informal Writing",
    "Linking Words (However/Although)",
    "Revisão Avançado",
];

const FLUENT_TOPICS: &[&str] = &[
    "Conversação: Opiniões Complexas",
    "Debating Techniques",
    "Interview Skills (Behavioral)",
    "Business Negotiations",
    "Presentation Skills",
    "Slang & Colloquialisms",
    "Understanding Accents",
    "Subtleties of Meaning",
    "Humor in English",
    "Cultural References",
    "News & Media Literacy",
    "Academic Writing",
    "Storytelling Advanced",
    "Hypothetical Situations",
    "Revisão Fluência",
];
