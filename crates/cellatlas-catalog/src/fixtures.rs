// SPDX-License-Identifier: Apache-2.0
//
// Mock data standing in for the live network inventory. Table order is
// observable through the API and through the diagnostic product indices,
// so entries must not be reordered.

use crate::{CatalogError, NetworkCatalog, SiteBucket};
use cellatlas_model::{
    CaseId, CellSite, Coordinates, Incident, IncidentId, IncidentStatus, IssueType, LocationType,
    MaintenanceId, MaintenanceWindow, NetworkTechnology, Product, ResolvedCase, Severity, SiteId,
    SiteStatus,
};
use chrono::{DateTime, Duration, Utc};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn site_buckets() -> Result<Vec<SiteBucket>, CatalogError> {
    use NetworkTechnology::{FiveGNsa, FiveGSa, Lte, Volte};
    Ok(vec![
        SiteBucket::new(
            "valencia",
            vec![
                CellSite::new(
                    SiteId::parse("VLC-001")?,
                    "Valencia Centro - Ayuntamiento",
                    "Plaza del Ayuntamiento, Valencia",
                    vec![Lte, FiveGNsa, FiveGSa],
                    3,
                    SiteStatus::Active,
                    1.2,
                    Coordinates {
                        lat: 39.4699,
                        lon: -0.3763,
                    },
                ),
                CellSite::new(
                    SiteId::parse("VLC-002")?,
                    "Valencia Centro - Xàtiva",
                    "Calle Xàtiva, Valencia",
                    vec![Lte, FiveGNsa],
                    3,
                    SiteStatus::Degraded,
                    0.8,
                    Coordinates {
                        lat: 39.4665,
                        lon: -0.3769,
                    },
                ),
                CellSite::new(
                    SiteId::parse("VLC-003")?,
                    "Valencia Centro - Colón",
                    "Plaza de Colón, Valencia",
                    vec![Lte, FiveGNsa, FiveGSa],
                    3,
                    SiteStatus::Active,
                    1.5,
                    Coordinates {
                        lat: 39.4731,
                        lon: -0.3719,
                    },
                ),
            ],
        ),
        SiteBucket::new(
            "paterna",
            vec![
                CellSite::new(
                    SiteId::parse("PTR-001")?,
                    "Paterna Polígono Industrial",
                    "Polígono Industrial Vara de Quart, Paterna",
                    vec![Lte, FiveGNsa],
                    3,
                    SiteStatus::Active,
                    2.0,
                    Coordinates {
                        lat: 39.5167,
                        lon: -0.4500,
                    },
                ),
                CellSite::new(
                    SiteId::parse("PTR-002")?,
                    "Paterna Centro Tecnológico",
                    "Parc Tecnològic, Paterna",
                    vec![Lte, FiveGNsa, FiveGSa],
                    3,
                    SiteStatus::Active,
                    1.8,
                    Coordinates {
                        lat: 39.5200,
                        lon: -0.4450,
                    },
                ),
            ],
        ),
        SiteBucket::new(
            "madrid",
            vec![CellSite::new(
                SiteId::parse("MAD-A3-280")?,
                "A3 Autovía - KM 280",
                "Autovía A3, KM 280",
                vec![Lte, Volte],
                3,
                SiteStatus::Active,
                3.5,
                Coordinates {
                    lat: 39.7500,
                    lon: -1.2000,
                },
            )],
        ),
        SiteBucket::new(
            "barcelona",
            vec![CellSite::new(
                SiteId::parse("BCN-M01")?,
                "Barcelona Metro L1 - Arc Triomf",
                "Metro L1, Estación Arc de Triomf",
                vec![Lte, Volte],
                2,
                SiteStatus::Active,
                0.3,
                Coordinates {
                    lat: 41.3908,
                    lon: 2.1808,
                },
            )],
        ),
    ])
}

fn incidents(now: DateTime<Utc>) -> Result<Vec<Incident>, CatalogError> {
    Ok(vec![
        Incident::new(
            IncidentId::parse("INC-2024-1142")?,
            IssueType::Interference,
            "Valencia Centro - Plaza Ayuntamiento",
            vec![SiteId::parse("VLC-001")?, SiteId::parse("VLC-002")?],
            Severity::High,
            now - Duration::hours(18),
            Some(now + Duration::hours(6)),
            IncidentStatus::InProgress,
            "PCI conflict detectado entre site VLC-001 sector 2 y VLC-002 sector 1 causando \
             interferencia co-channel en banda 5G NSA. Cellatlas AI ha identificado overshooting \
             en VLC-002.",
            1250,
        ),
        Incident::new(
            IncidentId::parse("INC-2024-1138")?,
            IssueType::Coverage,
            "Paterna - Polígono Industrial Vara de Quart",
            vec![SiteId::parse("PTR-001")?],
            Severity::Medium,
            now - Duration::days(7),
            Some(now + Duration::hours(48)),
            IncidentStatus::Investigating,
            "Degradación gradual de señal 5G detectada por Cellatlas Geolocation. Análisis de \
             drive test virtual muestra caída de RSRP en -10 dBm en última semana. Probable \
             misconfiguration de tilt de antena.",
            450,
        ),
    ])
}

fn maintenance(now: DateTime<Utc>) -> Result<Vec<MaintenanceWindow>, CatalogError> {
    Ok(vec![MaintenanceWindow::new(
        MaintenanceId::parse("MAINT-2024-0891")?,
        vec![SiteId::parse("VLC-002")?],
        now - Duration::hours(20),
        now + Duration::hours(4),
        "Software upgrade + antenna optimization",
        "Posibles cortes intermitentes de 5G NSA, fallback a 4G disponible",
        strings(&["5G NSA"]),
        true,
    )])
}

fn products() -> Vec<Product> {
    vec![
        Product::new(
            "Cellatlas AI Agents - Anomaly Detection",
            "AI Agents",
            "Detección automática de anomalías en redes móviles usando Machine Learning. \
             Identifica patrones anormales en KPIs antes de que afecten a clientes.",
            strings(&[
                "Detección temprana de degradación de cobertura",
                "Identificación de interferencias (PCI conflicts, RSI)",
                "Predicción de fallos de handover",
                "Alertas automáticas de congestión de red",
            ]),
            strings(&[
                "Reduce MTTR (Mean Time To Repair) en 60%",
                "Detecta problemas 24-48h antes que métodos tradicionales",
                "Automatiza el 70% de diagnósticos de primer nivel",
            ]),
            "https://www.cellatlas.io/solutions/ai-products/anomalies",
        ),
        Product::new(
            "Cellatlas Geolocation - Virtual Drive Testing",
            "AI Products",
            "Convierte datos de usuarios reales en análisis geo-localizado de calidad de red. \
             Elimina la necesidad de drive tests físicos.",
            strings(&[
                "Validación de rollout 5G sin coste de drive testing",
                "Mapas de calor de cobertura en tiempo real",
                "Análisis de rutas (carreteras, ferrocarril, metro)",
                "Optimización de cobertura indoor",
            ]),
            strings(&[
                "Reduce costes de drive testing en 80%",
                "Cobertura 100x mayor que drive test manual",
                "Datos actualizados continuamente vs snapshots",
            ]),
            "https://www.cellatlas.io/solutions/ai-products/geolocation",
        ),
        Product::new(
            "Cellatlas Telco Fabric",
            "Data Fabric",
            "Unifica datos de radio, core y operaciones en una capa única query-ready. Elimina \
             silos de datos entre vendors.",
            strings(&[
                "Correlación de eventos entre RAN y Core",
                "Queries cross-vendor en segundos",
                "Dashboards unificados de KPIs multi-tecnología",
                "Data lake telco con semantic layer",
            ]),
            strings(&[
                "Reduce tiempo de troubleshooting de horas a minutos",
                "Elimina 80% de trabajo manual de correlación de logs",
                "Habilita uso de AI sobre datos unificados",
            ]),
            "https://www.cellatlas.io/solutions/telco-fabric",
        ),
        Product::new(
            "Cellatlas Interference Detection",
            "AI Products",
            "Detecta y diagnostica automáticamente interferencias en redes móviles (PCI \
             conflicts, inter-cell, external).",
            strings(&[
                "Detección de PCI conflicts en rollout 5G",
                "Identificación de interferencias externas (radar, military)",
                "Análisis de inter-cell interference",
                "Optimización automática de neighbor lists",
            ]),
            strings(&[
                "Identifica >95% de interferencias automáticamente",
                "Recomienda acciones correctivas específicas",
                "Integra con Telco Fabric para análisis multi-capa",
            ]),
            "https://www.cellatlas.io/solutions/ai-products/interference",
        ),
    ]
}

fn cases() -> Result<Vec<ResolvedCase>, CatalogError> {
    Ok(vec![
        ResolvedCase::new(
            CaseId::parse("CASE-5G-0782")?,
            "Pérdida de cobertura 5G en zona urbana con fallback a 4G",
            "PCI conflict entre dos sites cercanos debido a expansion de red. Overshooting de \
             antena recién instalada",
            "Ajuste de tilt mecánico de -2° en site VLC-002 sector 1 + reconfiguración de PCI \
             de 156 a 289. Optimización MLB para balanceo de carga.",
            8.5,
            0.98,
            LocationType::Urban,
        ),
        ResolvedCase::new(
            CaseId::parse("CASE-5G-0654")?,
            "Fluctuación constante de señal 5G en polígono industrial",
            "Interferencia externa de radar meteorológico en banda n78 (3.5 GHz). Cellatlas \
             Interference Detection identificó patrón periódico cada 12 segundos.",
            "Reconfiguración de carrier aggregation para evitar frecuencias afectadas. \
             Activación de filtrado adaptativo. Escalado a autoridad de telecomunicaciones \
             para coordinación de frecuencias.",
            72.0,
            0.92,
            LocationType::Industrial,
        ),
        ResolvedCase::new(
            CaseId::parse("CASE-4G-1023")?,
            "Baja velocidad de datos en autovía, calls OK pero datos lentos",
            "Congestión de backhaul en site A3-KM280. Saturación de enlace microwave en horas \
             pico (95% utilización). Cellatlas AI detectó patrón de degradación gradual.",
            "Upgrade de backhaul de 1 Gbps a 10 Gbps fiber. Implementación de QoS en S1 \
             interface. Activación de carrier aggregation para offload a banda adicional.",
            120.0,
            1.0,
            LocationType::Highway,
        ),
        ResolvedCase::new(
            CaseId::parse("CASE-VLT-0445")?,
            "Llamadas caídas en metro/túneles",
            "Handover failure entre outdoor macro cell y indoor DAS system. Misconfiguration \
             en A3 event offset. Cellatlas detectó RLF rate >15%.",
            "Optimización de neighbor list, ajuste de A3 offset de 3dB a 1dB, configuración de \
             TTT (Time To Trigger) de 320ms a 160ms. Activación de CS Fallback optimization.",
            12.0,
            0.95,
            LocationType::Underground,
        ),
    ])
}

pub(crate) fn builtin_catalog(now: DateTime<Utc>) -> Result<NetworkCatalog, CatalogError> {
    Ok(NetworkCatalog::new(
        site_buckets()?,
        incidents(now)?,
        maintenance(now)?,
        products(),
        cases()?,
    ))
}
