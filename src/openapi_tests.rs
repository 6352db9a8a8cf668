use crate::schemas::ApiDoc;
use utoipa::OpenApi;
use utoipa::openapi::{PathItemType, RefOr, schema::Schema};

#[test]
fn test_openapi_schema_generation() {
    let openapi = ApiDoc::openapi();

    let components = openapi.components.as_ref().unwrap();
    for name in [
        "ErrorResponse",
        "HealthResponse",
        "PrefectureKpi",
        "MunicipalityKpi",
        "MunicipalityRankingRow",
        "SectorTrendPoint",
        "TrajectoryPoint",
        "PaceStatus",
    ] {
        assert!(components.schemas.contains_key(name), "missing schema {name}");
    }

    assert!(serde_json::to_string(&openapi).is_ok());
}

#[test]
fn test_error_response_schema_structure() {
    let openapi = ApiDoc::openapi();
    let components = openapi.components.as_ref().unwrap();
    let error_response_schema = components.schemas.get("ErrorResponse").unwrap();

    if let RefOr::T(Schema::Object(obj)) = error_response_schema {
        let properties = &obj.properties;
        assert!(properties.contains_key("error"));
        assert!(properties.contains_key("code"));
        assert!(properties.contains_key("success"));
    } else {
        panic!("ErrorResponse should be an object schema");
    }
}

#[test]
fn test_trajectory_point_schema_structure() {
    let openapi = ApiDoc::openapi();
    let components = openapi.components.as_ref().unwrap();
    let schema = components.schemas.get("TrajectoryPoint").unwrap();

    if let RefOr::T(Schema::Object(obj)) = schema {
        for field in ["year", "actual", "required", "target_2030", "target_2050"] {
            assert!(obj.properties.contains_key(field), "missing field {field}");
        }
        // only the year is always present
        assert_eq!(obj.required, vec!["year".to_string()]);
    } else {
        panic!("TrajectoryPoint should be an object schema");
    }
}

#[test]
fn test_openapi_paths() {
    let openapi = ApiDoc::openapi();

    for path in [
        "/health",
        "/api/v1/home",
        "/api/v1/prefectures",
        "/api/v1/prefectures/{prefecture_code}",
        "/api/v1/municipalities/{city_code}",
    ] {
        let item = openapi
            .paths
            .paths
            .get(path)
            .unwrap_or_else(|| panic!("missing path {path}"));
        assert!(item.operations.contains_key(&PathItemType::Get));
    }

    let detail = openapi.paths.paths.get("/api/v1/municipalities/{city_code}").unwrap();
    let responses = &detail.operations.get(&PathItemType::Get).unwrap().responses;
    for status in ["200", "400", "404", "500"] {
        assert!(responses.responses.contains_key(status));
    }
}

#[test]
fn test_error_responses_reference_schema_by_name() {
    let openapi = ApiDoc::openapi();
    let openapi_json = serde_json::to_string(&openapi).unwrap();

    assert!(!openapi_json.contains("crate.schemas.ErrorResponse"));
    assert!(!openapi_json.contains("crate::schemas::ErrorResponse"));
    assert!(openapi_json.contains("#/components/schemas/ErrorResponse"));
}
