//! Mock CMS tests for the clubcms client.
//!
//! These tests use wiremock to simulate the CMS and verify the exact
//! request shape of every service, plus the client's error behavior,
//! without network access or a running backend.

#![allow(deprecated)]

use clubcms::{
    CmsClient, CmsConfig, CmsUrl, DocumentId, EnrollmentService, Error, PageRequest,
    services::{
        ActivitiesService, ContactService, DivisionsService, FaqsService, GalleriesService,
        NewsService, PricesService, SeasonService, SettingsService, TeamService,
    },
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a base URL from a mock server.
fn mock_base(server: &MockServer) -> CmsUrl {
    // For tests, HTTP localhost is allowed
    CmsUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

fn mock_client(server: &MockServer) -> CmsClient {
    CmsClient::new(CmsConfig::new(mock_base(server)))
}

fn list_meta(page: u32, page_size: u32, page_count: u32, total: u64) -> serde_json::Value {
    json!({
        "pagination": { "page": page, "pageSize": page_size, "pageCount": page_count, "total": total }
    })
}

fn faq_record(id: i64, question: &str) -> serde_json::Value {
    json!({
        "id": id,
        "documentId": format!("faqdoc{id}abcdefghijklmnop"),
        "Pregunta": question,
        "Respuesta": "Consultar en secretaría.",
        "createdAt": "2025-01-10T12:00:00.000Z",
        "updatedAt": "2025-01-10T12:00:00.000Z",
        "publishedAt": "2025-01-11T12:00:00.000Z"
    })
}

fn article_record(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "documentId": "q8wn5tjx2vbk7ry1mfa3dzlc",
        "Titulo": title,
        "Texto": "Cuerpo de la noticia.",
        "Imagen": {
            "id": 3,
            "url": "/uploads/portada.jpg",
            "formats": { "small": { "url": "/uploads/small_portada.jpg", "width": 500, "height": 333 } }
        },
        "createdAt": "2025-11-20T12:00:00.000Z",
        "updatedAt": "2025-11-20T12:00:00.000Z",
        "publishedAt": "2025-11-21T08:00:00.000Z"
    })
}

fn settings_record() -> serde_json::Value {
    json!({
        "id": 1,
        "documentId": "d41hxxtpml1ove7hb3oqjltn",
        "HabilitarEquipo": true,
        "HabilitarInscripciones": false,
        "HabilitarPrecios": true,
        "createdAt": "2025-01-10T12:00:00.000Z",
        "updatedAt": "2025-06-02T09:30:00.000Z",
        "publishedAt": "2025-06-02T09:30:01.000Z"
    })
}

// ============================================================================
// Request Shape Tests
// ============================================================================

#[tokio::test]
async fn faqs_list_uses_fixed_sort() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/preguntas-frecuentes"))
        .and(query_param("sort[0]", "createdAt:asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [faq_record(1, "¿Hay pileta climatizada?")],
            "meta": list_meta(1, 25, 1, 1)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let faqs = FaqsService::new(mock_client(&server));
    let response = faqs.list().await.unwrap();

    assert_eq!(response.len(), 1);
    assert_eq!(response.data[0].question, "¿Hay pileta climatizada?");
}

#[tokio::test]
async fn divisions_list_populates_everything() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/divisiones-edades"))
        .and(query_param("sort[0]", "createdAt:asc"))
        .and(query_param("populate", "*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 1,
                "documentId": "divdoc1abcdefghijklmnopq",
                "Titulo": "Escuela de natación",
                "Columna": [
                    { "id": 1, "Division": "Pre-infantil", "Edades": "4 a 6 años" },
                    { "id": 2, "Division": "Infantil", "Edades": "7 a 9 años" }
                ],
                "createdAt": "2025-01-10T12:00:00.000Z",
                "updatedAt": "2025-01-10T12:00:00.000Z",
                "publishedAt": "2025-01-11T12:00:00.000Z"
            }],
            "meta": list_meta(1, 25, 1, 1)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let divisions = DivisionsService::new(mock_client(&server));
    let response = divisions.list().await.unwrap();

    assert_eq!(response.data[0].columns.len(), 2);
    assert_eq!(response.data[0].columns[1].ages, "7 a 9 años");
}

#[tokio::test]
async fn contact_get_sends_no_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/contacto"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 1,
                "documentId": "contactdoc1abcdefghijklm",
                "Telefono": "2616639266",
                "Whatsapp": "5492616639266",
                "Ubicacion": "Av. del Parque 1200, Mendoza",
                "Email": "info@club.example",
                "Horarios": "Lunes a viernes de 9 a 18",
                "Facebook": "https://facebook.com/club",
                "Instagram": "https://instagram.com/club",
                "MapUrl": "https://maps.example/club",
                "MapIframe": "<iframe src=\"https://maps.example/club\"></iframe>",
                "createdAt": "2025-01-10T12:00:00.000Z",
                "updatedAt": "2025-01-10T12:00:00.000Z",
                "publishedAt": "2025-01-11T12:00:00.000Z"
            },
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let contact = ContactService::new(mock_client(&server));
    let response = contact.get().await.unwrap();

    assert_eq!(response.data.email, "info@club.example");
    assert!(response.meta.pagination.is_none());
}

#[tokio::test]
async fn settings_envelope_passes_through_unmodified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/ajuste"))
        .and(query_param("populate", "*"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": settings_record(), "meta": {} })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let settings = SettingsService::new(mock_client(&server));
    let response = settings.get().await.unwrap();

    assert!(response.data.team_enabled);
    assert!(!response.data.enrollment_enabled);
    assert!(response.data.prices_enabled);
    assert!(response.data.enrollment_form.is_none());
    assert!(response.meta.pagination.is_none());
}

#[tokio::test]
async fn prices_list_populates_conditions_recursively() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/precios"))
        .and(query_param("sort[0]", "createdAt:asc"))
        .and(query_param("populate[Condiciones][populate]", "*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 9,
                "documentId": "m4kd82rv6xqw1zy0tpn5hcgj",
                "Turno": "Medio turno",
                "Condiciones": [{
                    "id": 1,
                    "Condicion": "No socios",
                    "precios": [{ "id": 1, "MedioDePago": "Efectivo", "Precio": 30000.0 }]
                }],
                "createdAt": "2025-10-01T12:00:00.000Z",
                "updatedAt": "2025-10-01T12:00:00.000Z",
                "publishedAt": "2025-10-01T12:00:00.000Z"
            }],
            "meta": list_meta(1, 25, 1, 1)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let prices = PricesService::new(mock_client(&server));
    let response = prices.list().await.unwrap();

    assert_eq!(response.data[0].conditions[0].prices[0].price, 30000.0);
}

#[tokio::test]
async fn team_list_sorts_by_display_order_and_restricts_image_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/equipos"))
        .and(query_param("sort[0]", "Orden:asc"))
        .and(query_param("populate[Imagen][fields][0]", "id"))
        .and(query_param("populate[Imagen][fields][1]", "formats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 5,
                "documentId": "teamdoc5abcdefghijklmnop",
                "Activo": true,
                "Orden": "01",
                "Nombre": "Ana Pérez",
                "Titulo": "Coordinadora",
                "Imagen": {
                    "id": 8,
                    "formats": { "small": { "url": "/uploads/small_ana.jpg", "width": 500, "height": 500 } }
                },
                "createdAt": "2025-01-10T12:00:00.000Z",
                "updatedAt": "2025-01-10T12:00:00.000Z",
                "publishedAt": "2025-01-11T12:00:00.000Z"
            }],
            "meta": list_meta(1, 25, 1, 1)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let team = TeamService::new(mock_client(&server));
    let response = team.list().await.unwrap();

    let member = &response.data[0];
    assert_eq!(member.name, "Ana Pérez");
    // Restricted projection: no url at the image root, only formats
    assert!(member.image.url.is_none());
    assert_eq!(member.image.formats.smallest().unwrap().width, 500);
}

#[tokio::test]
async fn season_get_populates_shift_schedules() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/fecha"))
        .and(query_param("populate", "*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 2,
                "documentId": "b7ytr4nq18skg5cm3vdl0wjp",
                "Temporada": "2025/2026",
                "Inicio": "2025-12-01",
                "Fin": "2026-02-28",
                "NoLaborables": "25 de diciembre y 1 de enero",
                "IngresoSalida": [
                    { "id": 1, "Turno": "Mañana", "Ingreso": "09:00", "Salida": "13:00" },
                    { "id": 2, "Turno": "Tarde", "Ingreso": "14:00", "Salida": "18:00" }
                ],
                "HorariosGuardia": [
                    { "id": 3, "Turno": "Fin de semana", "Ingreso": "10:00", "Salida": "19:00" }
                ],
                "createdAt": "2025-10-01T12:00:00.000Z",
                "updatedAt": "2025-10-01T12:00:00.000Z",
                "publishedAt": "2025-10-01T12:00:00.000Z"
            },
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let season = SeasonService::new(mock_client(&server));
    let response = season.get().await.unwrap();

    assert_eq!(response.data.entry_exit.len(), 2);
    assert_eq!(response.data.guard_hours[0].shift, "Fin de semana");
}

#[tokio::test]
async fn activities_list_uses_fixed_sort() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/actividades"))
        .and(query_param("sort[0]", "createdAt:asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 1,
                "documentId": "actdoc1abcdefghijklmnopq",
                "Titulo": "Natación",
                "Subtitulo": "Todas las edades",
                "Descripcion": "Clases de lunes a viernes.",
                "Icono": {
                    "width": 24, "height": 24,
                    "iconData": "<svg></svg>", "iconName": "swim",
                    "isSvgEditable": true, "isIconNameEditable": true
                },
                "createdAt": "2025-01-10T12:00:00.000Z",
                "updatedAt": "2025-01-10T12:00:00.000Z",
                "publishedAt": "2025-01-11T12:00:00.000Z"
            }],
            "meta": list_meta(1, 25, 1, 1)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let activities = ActivitiesService::new(mock_client(&server));
    let response = activities.list().await.unwrap();

    assert_eq!(response.data[0].icon.icon_name, "swim");
}

// ============================================================================
// Pagination Tests
// ============================================================================

#[tokio::test]
async fn news_list_defaults_to_first_page_of_25() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/noticias"))
        .and(query_param("pagination[page]", "1"))
        .and(query_param("pagination[pageSize]", "25"))
        .and(query_param("sort[0]", "createdAt:desc"))
        .and(query_param("populate[Imagen][fields][0]", "id"))
        .and(query_param("populate[Imagen][fields][1]", "url"))
        .and(query_param("populate[Imagen][fields][2]", "formats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [article_record(12, "Arranca la temporada")],
            "meta": list_meta(1, 25, 1, 1)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let news = NewsService::new(mock_client(&server));
    let response = news.list(PageRequest::default()).await.unwrap();

    assert_eq!(response.data[0].title, "Arranca la temporada");
    assert!(!response.has_more());
}

#[tokio::test]
async fn news_list_passes_explicit_page_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/noticias"))
        .and(query_param("pagination[page]", "2"))
        .and(query_param("pagination[pageSize]", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [article_record(3, "Resultados del torneo")],
            "meta": list_meta(2, 10, 3, 24)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let news = NewsService::new(mock_client(&server));
    let response = news.list(PageRequest::new(2, 10)).await.unwrap();

    assert_eq!(response.meta.pagination.page, 2);
    assert!(response.has_more());
}

#[tokio::test]
async fn galleries_list_restricts_photo_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/galerias"))
        .and(query_param("sort[0]", "createdAt:desc"))
        .and(query_param("pagination[page]", "1"))
        .and(query_param("pagination[pageSize]", "25"))
        .and(query_param("populate[Fotos][fields][0]", "id"))
        .and(query_param("populate[Fotos][fields][1]", "documentId"))
        .and(query_param("populate[Fotos][fields][6]", "formats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 2,
                "documentId": "albdoc2abcdefghijklmnopq",
                "Nombre": "Torneo de verano",
                "Fotos": [{
                    "id": 31,
                    "documentId": "pzc1vlf9tqz0oybcwxc2aaaa",
                    "name": "torneo.jpg",
                    "width": 4000,
                    "height": 3000,
                    "url": "/uploads/torneo.jpg",
                    "formats": {
                        "thumbnail": { "url": "/uploads/thumbnail_torneo.jpg", "width": 208, "height": 156 }
                    }
                }],
                "createdAt": "2025-02-01T12:00:00.000Z",
                "updatedAt": "2025-02-01T12:00:00.000Z",
                "publishedAt": "2025-02-02T12:00:00.000Z"
            }],
            "meta": list_meta(1, 25, 1, 1)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let galleries = GalleriesService::new(mock_client(&server));
    let response = galleries.list(PageRequest::default()).await.unwrap();

    assert_eq!(response.data[0].photos[0].name, "torneo.jpg");
}

// ============================================================================
// By-documentId Tests
// ============================================================================

#[tokio::test]
async fn news_by_document_id_targets_the_record_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/noticias/abc123"))
        .and(query_param("populate[Imagen][fields][0]", "id"))
        .and(query_param("populate[Imagen][fields][1]", "url"))
        .and(query_param("populate[Imagen][fields][2]", "formats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": article_record(12, "Arranca la temporada") })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let news = NewsService::new(mock_client(&server));
    let id = DocumentId::new("abc123").unwrap();
    let response = news.by_document_id(&id).await.unwrap();

    assert_eq!(response.data.title, "Arranca la temporada");
    assert!(response.meta.pagination.is_none());
}

#[tokio::test]
async fn gallery_by_document_id_targets_the_record_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/galerias/def456"))
        .and(query_param("populate[Fotos][fields][0]", "id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 2,
                "documentId": "def456",
                "Nombre": "Torneo de verano",
                "Fotos": [],
                "createdAt": "2025-02-01T12:00:00.000Z",
                "updatedAt": "2025-02-01T12:00:00.000Z",
                "publishedAt": "2025-02-02T12:00:00.000Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let galleries = GalleriesService::new(mock_client(&server));
    let id = DocumentId::new("def456").unwrap();
    let response = galleries.by_document_id(&id).await.unwrap();

    assert!(response.data.photos.is_empty());
}

// ============================================================================
// Legacy Adapter Tests
// ============================================================================

#[tokio::test]
async fn enrollment_status_adapts_settings_without_extra_round_trip() {
    let server = MockServer::start().await;

    // Only the settings endpoint exists; the legacy endpoint is never hit
    Mock::given(method("GET"))
        .and(path("/api/ajuste"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": settings_record(), "meta": {} })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let enrollment = EnrollmentService::new(mock_client(&server));
    let response = enrollment.status().await.unwrap();

    assert!(!response.data.open);
    assert_eq!(response.data.document_id, "d41hxxtpml1ove7hb3oqjltn");
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn non_success_status_rejects_with_numeric_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/noticias/missing0"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "data": null,
            "error": { "status": 404, "name": "NotFoundError", "message": "Not Found", "details": {} }
        })))
        .mount(&server)
        .await;

    let news = NewsService::new(mock_client(&server));
    let id = DocumentId::new("missing0").unwrap();
    let err = news.by_document_id(&id).await.unwrap_err();

    assert!(err.to_string().contains("404"));
    match err {
        Error::Status(status) => {
            assert!(status.is_not_found());
            assert_eq!(status.code.as_deref(), Some("NotFoundError"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_body_that_is_not_json_still_reports_the_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/contacto"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let contact = ContactService::new(mock_client(&server));
    let err = contact.get().await.unwrap_err();

    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn invalid_json_body_rejects_with_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/contacto"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("definitely not json", "application/json"),
        )
        .mount(&server)
        .await;

    let contact = ContactService::new(mock_client(&server));
    let err = contact.get().await.unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn unreachable_backend_rejects_with_transport_error() {
    // Nothing listens on port 1
    let base = CmsUrl::new("http://127.0.0.1:1").unwrap();
    let contact = ContactService::new(CmsClient::new(CmsConfig::new(base)));

    let err = contact.get().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

// ============================================================================
// Idempotence Tests
// ============================================================================

#[tokio::test]
async fn identical_reads_yield_identical_envelopes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/preguntas-frecuentes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [faq_record(1, "¿Hay estacionamiento?"), faq_record(2, "¿Se puede ir de visita?")],
            "meta": list_meta(1, 25, 1, 2)
        })))
        .expect(2)
        .mount(&server)
        .await;

    let faqs = FaqsService::new(mock_client(&server));
    let first = faqs.list().await.unwrap();
    let second = faqs.list().await.unwrap();

    assert_eq!(first, second);
}
