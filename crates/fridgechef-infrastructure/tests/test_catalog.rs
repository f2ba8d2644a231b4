use fridgechef_core::recipe::RecipeCatalog;
use fridgechef_infrastructure::TomlRecipeCatalog;
use tempfile::TempDir;

const RECIPES: &str = r#"
[[recipe]]
id = 3
title = "치즈리조또"
instructions = "쌀을 볶는다.\n육수를 붓는다.\n치즈를 녹인다."
ingredients = ["쌀", "치즈", "양파"]
cook_time_minutes = 25
tastes = ["고소한"]

[[recipe]]
id = 1
title = "크림파스타"
instructions = "면을 삶는다.\n생크림 소스를 만든다."
ingredients = ["파스타면", "생크림", "치즈"]
estimated_price = 9000

[[recipe]]
id = 2
title = "김치볶음밥"
ingredients = ["김치", "밥"]
"#;

fn catalog() -> TomlRecipeCatalog {
    TomlRecipeCatalog::from_toml_str(RECIPES).expect("Should parse catalog")
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test]
async fn test_load_catalog_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("recipes.toml");
    std::fs::write(&path, RECIPES).unwrap();

    let catalog = TomlRecipeCatalog::load(&path).await.expect("Should load catalog");
    assert_eq!(catalog.len(), 3);

    let risotto = catalog.find_by_id(3).await.unwrap().expect("Recipe 3 exists");
    assert_eq!(risotto.title, "치즈리조또");
    assert_eq!(risotto.cook_time_minutes, Some(25));
    assert_eq!(risotto.instructions.lines().count(), 3);
    assert!(catalog.find_by_id(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_missing_catalog_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = TomlRecipeCatalog::load(&temp_dir.path().join("nope.toml")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_ingredients_rank_by_overlap_then_id() {
    let catalog = catalog();

    let found = catalog
        .find_by_ingredients(&names(&["치즈", "생크림"]), 10)
        .await
        .unwrap();
    let ids: Vec<_> = found.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);

    let found = catalog.find_by_ingredients(&names(&["치즈"]), 10).await.unwrap();
    let ids: Vec<_> = found.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);

    let found = catalog.find_by_ingredients(&names(&["치즈"]), 1).await.unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn test_no_signal_returns_catalog_order() {
    let found = catalog().find_by_ingredients(&[], 2).await.unwrap();
    let ids: Vec<_> = found.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_title_search_and_id_lookup() {
    let catalog = catalog();

    let found = catalog.find_by_title_containing("리조또").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 3);
    assert!(catalog.find_by_title_containing("  ").await.unwrap().is_empty());

    let found = catalog.find_by_ids(&[2, 3, 42]).await.unwrap();
    let ids: Vec<_> = found.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[tokio::test]
async fn test_demo_catalog_parses() {
    let catalog = TomlRecipeCatalog::from_toml_str(include_str!("../../../demos/recipes.toml"))
        .expect("Demo catalog should parse");
    assert_eq!(catalog.len(), 5);

    let stew = catalog.find_by_id(1).await.unwrap().unwrap();
    let steps: Vec<_> = stew.instructions.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(steps.len(), 3);
}
