//! End-to-end behavior of the Question aggregate through its public API.

use quiz_domain::{ChoiceId, DomainError, Question, ValidationError};

/// Question with three choices: one incorrect, two correct.
fn multiple_choice_question() -> Question {
    let mut q = Question::new("Pergunta com múltiplas escolhas")
        .unwrap()
        .with_points(5)
        .with_max_selections(2);
    q.add_choice("Opção A", false).unwrap(); // ID 1
    q.add_choice("Opção B", true).unwrap(); // ID 2
    q.add_choice("Opção C", true).unwrap(); // ID 3
    q
}

fn ids(raw: &[u32]) -> Vec<ChoiceId> {
    raw.iter().copied().map(ChoiceId::new).collect()
}

// ==================== Questions ====================

#[test]
fn create_question() {
    let q = Question::new("q1").unwrap();
    assert!(q.id().value() > 0);
}

#[test]
fn create_multiple_questions() {
    let q1 = Question::new("q1").unwrap();
    let q2 = Question::new("q2").unwrap();
    assert_ne!(q1.id(), q2.id());
}

#[test]
fn create_question_with_invalid_title() {
    for title in [String::new(), "a".repeat(201), "a".repeat(500)] {
        let err = Question::new(title).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}

#[test]
fn create_question_with_valid_points() {
    let q = Question::new("q1").unwrap().with_points(1);
    assert_eq!(q.points(), 1);
    let q = Question::new("q1").unwrap().with_points(100);
    assert_eq!(q.points(), 100);
}

// ==================== Choices ====================

#[test]
fn create_choice() {
    let mut q = Question::new("q1").unwrap();
    q.add_choice("a", false).unwrap();

    assert_eq!(q.choices().len(), 1);
    let choice = &q.choices()[0];
    assert_eq!(choice.text(), "a");
    assert!(!choice.is_correct());
}

#[test]
fn add_multiple_choices_assigns_sequential_ids() {
    let mut q = Question::new("Teste de múltiplas escolhas").unwrap();
    let id1 = q.add_choice("Escolha 1", false).unwrap().id();
    let id2 = q.add_choice("Escolha 2", true).unwrap().id();

    assert_eq!(q.choices().len(), 2);
    assert_eq!(id1, ChoiceId::new(1));
    assert_eq!(id2, ChoiceId::new(2));
}

#[test]
fn remove_choice_by_id() {
    let mut q = Question::new("Teste de remoção por ID").unwrap();
    let id1 = q.add_choice("Escolha 1", false).unwrap().id();
    let id2 = q.add_choice("Escolha 2", true).unwrap().id();

    q.remove_choice_by_id(id1).unwrap();
    assert_eq!(q.choices().len(), 1);
    assert_eq!(q.choices()[0].id(), id2);
}

#[test]
fn remove_choice_by_invalid_id() {
    let mut q = Question::new("Teste de remoção inválida").unwrap();
    q.add_choice("Escolha 1", false).unwrap();

    let err = q.remove_choice_by_id(ChoiceId::new(999)).unwrap_err();
    assert_eq!(err, DomainError::ChoiceNotFound(ChoiceId::new(999)));
    assert_eq!(q.choices().len(), 1);
}

#[test]
fn remove_all_choices() {
    let mut q = Question::new("Teste de remoção de todas as escolhas").unwrap();
    q.add_choice("Escolha 1", false).unwrap();
    q.add_choice("Escolha 2", true).unwrap();

    q.remove_all_choices();
    assert!(q.choices().is_empty());
}

#[test]
fn add_choice_empty_text() {
    let mut q = Question::new("Teste de texto vazio").unwrap();
    let err = q.add_choice("", false).unwrap_err();
    assert_eq!(
        err,
        DomainError::Validation(ValidationError::Empty {
            field: "choice text"
        })
    );
    assert!(q.choices().is_empty());
}

#[test]
fn add_choice_long_text() {
    let mut q = Question::new("Teste de texto longo").unwrap();
    assert!(q.add_choice("a".repeat(100), false).is_ok());

    let err = q.add_choice("a".repeat(101), false).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(q.choices().len(), 1);
}

#[test]
fn choice_id_after_removal_continues_from_last_issued() {
    let mut q = Question::new("Teste de geração de ID após remoção").unwrap();
    q.add_choice("Escolha 1", false).unwrap();
    let id2 = q.add_choice("Escolha 2", false).unwrap().id();
    let id3 = q.add_choice("Escolha 3", false).unwrap().id();

    q.remove_choice_by_id(id2).unwrap();
    let id4 = q.add_choice("Escolha 4", false).unwrap().id();
    assert_eq!(id4.value(), id3.value() + 1);
}

#[test]
fn choice_id_after_removing_last_is_not_reused() {
    let mut q = Question::new("q1").unwrap();
    q.add_choice("a", false).unwrap();
    let id2 = q.add_choice("b", false).unwrap().id();

    q.remove_choice_by_id(id2).unwrap();
    let id3 = q.add_choice("c", false).unwrap().id();
    assert_eq!(id3, ChoiceId::new(3));
}

// ==================== Selection ====================

#[test]
fn select_choices_exceed_max_selections() {
    let mut q = Question::new("Teste de seleção excedida")
        .unwrap()
        .with_max_selections(1);
    let id1 = q.add_choice("Escolha 1", true).unwrap().id();
    let id2 = q.add_choice("Escolha 2", false).unwrap().id();

    let err = q.select_choices(&[id1, id2]).unwrap_err();
    assert_eq!(
        err,
        DomainError::Validation(ValidationError::TooManySelections {
            submitted: 2,
            max: 1
        })
    );
}

#[test]
fn select_choices_only_correct_returned() {
    let mut q = Question::new("Teste de seleção correta")
        .unwrap()
        .with_max_selections(2);
    let id1 = q.add_choice("Escolha 1", true).unwrap().id();
    let id2 = q.add_choice("Escolha 2", false).unwrap().id();

    assert_eq!(q.select_choices(&[id1, id2]).unwrap(), vec![id1]);
}

#[test]
fn set_correct_choices() {
    let mut q = Question::new("Teste de marcação de correta")
        .unwrap()
        .with_max_selections(2);
    let id1 = q.add_choice("Escolha 1", false).unwrap().id();
    let id2 = q.add_choice("Escolha 2", false).unwrap().id();

    q.set_correct_choices(&[id2]);
    assert!(!q.choice(id1).unwrap().is_correct());
    assert!(q.choice(id2).unwrap().is_correct());
}

#[test]
fn set_correct_choices_ignores_unknown_ids() {
    let mut q = Question::new("q1").unwrap();
    let id1 = q.add_choice("a", false).unwrap().id();

    q.set_correct_choices(&ids(&[1, 999]));
    assert!(q.choice(id1).unwrap().is_correct());
    assert_eq!(q.choices().len(), 1);
}

// ==================== Fixture ====================

#[test]
fn fixture_choice_count() {
    assert_eq!(multiple_choice_question().choices().len(), 3);
}

#[test]
fn fixture_select_correct_choices() {
    let q = multiple_choice_question();
    assert_eq!(q.select_choices(&ids(&[2, 3])).unwrap(), ids(&[2, 3]));
}

#[test]
fn fixture_remove_choice_effect() {
    let mut q = multiple_choice_question();
    q.remove_choice_by_id(ChoiceId::new(3)).unwrap();
    assert_eq!(q.select_choices(&ids(&[2, 3])).unwrap(), ids(&[2]));
}
