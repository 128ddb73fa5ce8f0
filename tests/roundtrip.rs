//! End-to-end round trips over the public API
//!
//! These tests exercise the full flow a front end drives: build a form,
//! hand out question handles, mutate through them, detach questions, and
//! snapshot the whole thing to JSON and back.

use formkit::{
    Answer, Form, FormQuestion, QuestionHandle, SelectQuestion, SharedOptions, TextQuestion,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn signup_form() -> (Form, QuestionHandle, QuestionHandle, QuestionHandle) {
    let mut form = Form::new("Signup");

    let name = form.add_question(TextQuestion::with_value("Name?", "Ada"));

    let mut toppings = SelectQuestion::multiple("Toppings?", ["cheese", "olives", "basil"]);
    toppings.set_values(["cheese", "basil"]);
    let toppings = form.add_question(toppings);

    let mut size = SelectQuestion::new("Size?", ["small", "medium", "large"]);
    size.set_value("medium");
    let size = form.add_question(size);

    (form, name, toppings, size)
}

#[test]
fn remove_middle_question_keeps_identities_and_values() {
    let (mut form, name, toppings, size) = signup_form();

    assert!(form.remove_question(&toppings));

    assert_eq!(form.len(), 2);
    assert_eq!(form.index_of(&name), Some(0));
    assert_eq!(form.index_of(&size), Some(1));
    assert_eq!(form.index_of(&toppings), None);

    // Survivors are the very questions the caller holds, values intact.
    assert!(form.question_at(0).unwrap().ptr_eq(&name));
    assert!(form.question_at(-1).unwrap().ptr_eq(&size));
    assert_eq!(name.borrow().answer(), Answer::Text("Ada"));
    assert_eq!(
        size.borrow().answer(),
        Answer::Selected(&["medium".to_string()])
    );

    // The detached question is no longer referenced, not mutated.
    assert_eq!(
        toppings.borrow().answer(),
        Answer::Selected(&["cheese".to_string(), "basil".to_string()])
    );
}

#[test]
fn serde_round_trip_reconstructs_a_structurally_equal_form() {
    let (form, ..) = signup_form();

    let snapshot = serde_json::to_string(&form).unwrap();
    let rebuilt: Form = serde_json::from_str(&snapshot).unwrap();

    assert_eq!(rebuilt, form);
}

#[test]
fn snapshot_shape_is_name_plus_questions() {
    let (form, ..) = signup_form();

    assert_eq!(
        serde_json::to_value(&form).unwrap(),
        json!({
            "name": "Signup",
            "questions": [
                {
                    "question": "Name?",
                    "type": "text",
                    "required": false,
                    "value": "Ada",
                },
                {
                    "question": "Toppings?",
                    "type": "select",
                    "required": false,
                    "multiple": true,
                    "options": ["cheese", "olives", "basil"],
                    "value": ["cheese", "basil"],
                },
                {
                    "question": "Size?",
                    "type": "select",
                    "required": false,
                    "multiple": false,
                    "options": ["small", "medium", "large"],
                    "value": ["medium"],
                },
            ],
        })
    );
}

#[test]
fn shared_options_stay_shared_in_the_form_but_not_across_serde() {
    let palette = SharedOptions::from_labels(["red", "green", "blue"]);
    let mut form = Form::new("Art class");
    let first = form.add_question(SelectQuestion::with_options(
        "Favorite color?",
        palette.clone(),
        false,
    ));
    let second = form.add_question(SelectQuestion::with_options(
        "Least favorite?",
        palette.clone(),
        false,
    ));

    // One edit through the shared handle shows up in both questions.
    palette.borrow_mut().add_option("mauve");
    let sees_mauve = |handle: &QuestionHandle| {
        handle
            .borrow()
            .as_select()
            .unwrap()
            .options()
            .borrow()
            .has_option("mauve")
    };
    assert!(sees_mauve(&first));
    assert!(sees_mauve(&second));

    // The snapshot flattens sharing into per-question option lists.
    let rebuilt: Form = serde_json::from_str(&serde_json::to_string(&form).unwrap()).unwrap();
    assert_eq!(rebuilt, form);

    let rebuilt_first = rebuilt.question_at(0).unwrap().borrow();
    let rebuilt_second = rebuilt.question_at(1).unwrap().borrow();
    assert!(!rebuilt_first
        .as_select()
        .unwrap()
        .options()
        .ptr_eq(rebuilt_second.as_select().unwrap().options()));
}

#[test]
fn invalid_construction_input_degrades_to_defaults() {
    let mut form = Form::new("");
    assert_eq!(form.name(), "New Form");

    let question = form.add_question(TextQuestion::new(""));
    assert_eq!(question.borrow().question(), "Untitled");
    assert!(!question.borrow().required());

    let select = form.add_question(SelectQuestion::new("Pick", ["", "only"]));
    let select = select.borrow();
    let select = select.as_select().unwrap();
    assert_eq!(select.options().borrow().labels(), &["only"]);
}

#[test]
fn mutating_through_handles_after_adding_is_visible_in_the_snapshot() {
    let (form, name, _, size) = signup_form();

    name.borrow_mut().set_required(true);
    name.borrow_mut()
        .as_text_mut()
        .unwrap()
        .set_value("Grace");
    size.borrow_mut().as_select_mut().unwrap().set_value("large");

    let value = serde_json::to_value(&form).unwrap();
    assert_eq!(value["questions"][0]["required"], json!(true));
    assert_eq!(value["questions"][0]["value"], json!("Grace"));
    assert_eq!(value["questions"][2]["value"], json!(["large"]));
}

#[test]
fn forms_with_different_question_state_are_not_equal() {
    let (form_a, ..) = signup_form();
    let (form_b, name_b, ..) = signup_form();

    assert_eq!(form_b, form_a);

    name_b.borrow_mut().toggle_required();
    assert_ne!(form_b, form_a);
}

#[test]
fn question_handles_can_be_prebuilt_and_added_in_bulk() {
    let questions = vec![
        FormQuestion::from(TextQuestion::new("Name?")),
        FormQuestion::from(SelectQuestion::new("Size?", ["s", "m", "l"])),
    ];
    let form = Form::with_questions("Bulk", questions);

    assert_eq!(form.len(), 2);
    assert_eq!(form.question_at(0).unwrap().borrow().question(), "Name?");
}
