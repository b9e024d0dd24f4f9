use super::*;
use crate::salary::SALARY_NOT_SPECIFIED;

fn provider_item() -> Value {
    json!({
        "id": "123456",
        "name": "Python Developer",
        "alternate_url": "https://hh.ru/vacancy/123456",
        "url": "https://api.hh.ru/vacancies/123456",
        "salary": {"from": 100000, "to": 150000, "currency": "RUR", "gross": true},
        "snippet": {"requirement": "Опыт от 3 лет", "responsibility": "Писать код"}
    })
}

#[test]
fn test_new_keeps_fields() {
    let vacancy = Vacancy::new(
        "Python Developer",
        "https://hh.ru/vacancy/123456",
        "100 000-150 000 руб.",
        "Требуется опыт от 3 лет...",
    );
    assert_eq!(vacancy.title(), "Python Developer");
    assert_eq!(vacancy.url(), "https://hh.ru/vacancy/123456");
    assert_eq!(vacancy.salary(), "100 000-150 000 руб.");
    assert_eq!(vacancy.description(), "Требуется опыт от 3 лет...");
}

#[test]
fn test_new_empty_salary_becomes_sentinel() {
    let vacancy = Vacancy::new("Python Developer", "https://hh.ru/vacancy/1", "", "...");
    assert_eq!(vacancy.salary(), SALARY_NOT_SPECIFIED);
    assert_eq!(vacancy.salary_value(), 0);
}

#[test]
fn test_from_provider() {
    let vacancy = Vacancy::from_provider(&provider_item());
    assert_eq!(vacancy.title(), "Python Developer");
    assert_eq!(vacancy.url(), "https://hh.ru/vacancy/123456");
    assert_eq!(vacancy.salary(), "100000-150000 RUR");
    assert_eq!(vacancy.description(), "Опыт от 3 лет");
    assert_eq!(vacancy.salary_value(), 100000);
}

#[test]
fn test_from_provider_falls_back_to_api_url() {
    let raw = json!({"name": "Go Developer", "url": "https://api.hh.ru/vacancies/9"});
    let vacancy = Vacancy::from_provider(&raw);
    assert_eq!(vacancy.url(), "https://api.hh.ru/vacancies/9");
}

#[test]
fn test_from_provider_defaults() {
    let raw = json!({"salary": null, "snippet": {"requirement": null}});
    let vacancy = Vacancy::from_provider(&raw);
    assert_eq!(vacancy.title(), TITLE_NOT_SPECIFIED);
    assert_eq!(vacancy.url(), "");
    assert_eq!(vacancy.salary(), SALARY_NOT_SPECIFIED);
    assert_eq!(vacancy.description(), NO_DESCRIPTION);
}

#[test]
fn test_from_provider_list() {
    let items = vec![provider_item(), json!({"name": "Java Developer"})];
    let vacancies = Vacancy::from_provider_list(&items);
    assert_eq!(vacancies.len(), 2);
    assert_eq!(vacancies[1].title(), "Java Developer");
}

#[test]
fn test_storage_round_trip() {
    let original = Vacancy::from_provider(&provider_item());
    let restored = Vacancy::from_storage_json(original.to_storage_json()).unwrap();
    assert_eq!(restored, original);
    assert_eq!(restored.salary_value(), original.salary_value());
}

#[test]
fn test_storage_shape() {
    let stored = Vacancy::new("A", "https://a", "", "d").to_storage_json();
    assert_eq!(
        stored,
        json!({
            "title": "A",
            "url": "https://a",
            "salary": SALARY_NOT_SPECIFIED,
            "description": "d"
        })
    );
}

#[test]
fn test_from_storage_rejects_other_shapes() {
    let provider_shaped = json!({"name": "A", "alternate_url": "https://a"});
    assert!(Vacancy::from_storage_json(provider_shaped).is_err());

    let missing_url = json!({"title": "A", "salary": "1 RUR", "description": "d"});
    assert!(Vacancy::from_storage_json(missing_url).is_err());
}

#[test]
fn test_from_storage_canonicalizes_salary() {
    let stored = json!({
        "title": "A",
        "url": "https://a",
        "salary": "Не указана",
        "description": "d"
    });
    let vacancy = Vacancy::from_storage_json(stored).unwrap();
    assert_eq!(vacancy.salary(), SALARY_NOT_SPECIFIED);
}

#[test]
fn test_to_provider_json() {
    let vacancy = Vacancy::from_provider(&provider_item());
    let raw = vacancy.to_provider_json();
    assert_eq!(raw["name"], "Python Developer");
    assert_eq!(raw["alternate_url"], "https://hh.ru/vacancy/123456");
    assert_eq!(raw["salary"]["from"], 100000);
    assert_eq!(raw["salary"]["to"], 150000);
    assert_eq!(raw["salary"]["currency"], "RUR");
    assert_eq!(raw["snippet"]["requirement"], "Опыт от 3 лет");

    assert_eq!(Vacancy::from_provider(&raw), vacancy);
}

#[test]
fn test_to_provider_json_without_salary() {
    let vacancy = Vacancy::new("A", "https://a", "", "d");
    assert!(vacancy.to_provider_json()["salary"].is_null());
}

#[test]
fn test_salary_comparison() {
    let python = Vacancy::new("Python Developer", "https://hh.ru/vacancy/123456", "100 000 руб.", "...");
    let java = Vacancy::new("Java Developer", "https://hh.ru/vacancy/654321", "150 000 руб.", "...");
    assert_eq!(java.cmp_by_salary(&python), Ordering::Greater);
    assert_eq!(python.cmp_by_salary(&java), Ordering::Less);
}

#[test]
fn test_equal_salary_is_not_equality() {
    let a = Vacancy::new("A", "https://a", "100 RUR", "d");
    let b = Vacancy::new("B", "https://b", "100 RUR", "d");
    assert_eq!(a.cmp_by_salary(&b), Ordering::Equal);
    assert_ne!(a, b);
}

#[test]
fn test_display() {
    let vacancy = Vacancy::new("Python Developer", "https://hh.ru/vacancy/1", "100 RUR", "d");
    assert_eq!(
        vacancy.to_string(),
        "Python Developer: 100 RUR (https://hh.ru/vacancy/1)"
    );
}

#[test]
fn test_salary_never_empty_through_any_constructor() {
    let stored = json!({"title": "A", "url": "https://a", "salary": "", "description": "d"});
    let built = [
        Vacancy::new("A", "https://a", "", "d"),
        Vacancy::new("A", "https://a", "   ", "d"),
        Vacancy::from_provider(&json!({"name": "A", "salary": ""})),
        Vacancy::from_provider(&json!({"name": "A", "salary": {}})),
        Vacancy::from_storage_json(stored.clone()).unwrap(),
        serde_json::from_value::<Vacancy>(stored.clone()).unwrap(),
        serde_json::from_str::<Vacancy>(&stored.to_string()).unwrap(),
    ];

    for vacancy in built {
        assert_eq!(vacancy.salary(), SALARY_NOT_SPECIFIED);
        let restored = Vacancy::from_storage_json(vacancy.to_storage_json()).unwrap();
        assert_eq!(restored, vacancy);
    }
}

#[test]
fn test_deserialize_rejects_unknown_fields() {
    let stored = json!({
        "title": "A",
        "url": "https://a",
        "salary": "1 RUR",
        "description": "d",
        "extra": true
    });
    assert!(serde_json::from_value::<Vacancy>(stored).is_err());
}

#[test]
fn test_to_provider_json_worded_salary() {
    let vacancy = Vacancy::new("A", "https://a", "от 100 000 до 150 000 руб.", "d");
    let raw = vacancy.to_provider_json();
    assert_eq!(raw["salary"]["from"], 100000);
    assert_eq!(raw["salary"]["to"], 150000);
    assert_eq!(raw["salary"]["currency"], "руб");
}
