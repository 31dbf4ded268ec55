mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::Router;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚐 Vehicle Booking - API de reservas de vehículos");
    info!("=================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // CORS permisivo solo en desarrollo
    let cors = if config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .nest("/auth", routes::create_auth_router())
        .nest("/users", routes::create_user_router(app_state.clone()))
        .nest("/vehicles", routes::create_vehicle_router(app_state.clone()))
        .nest("/bookings", routes::create_booking_router(app_state.clone()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("🔐 Auth:");
    info!("   POST /auth/register - Registrar usuario");
    info!("   POST /auth/login - Login");
    info!("👤 Users:");
    info!("   GET  /users/all - Listar usuarios (admin)");
    info!("   GET  /users/get-by-id/:user_id - Obtener usuario");
    info!("   GET  /users/get-logged-in-profile-info - Perfil del token");
    info!("   GET  /users/get-user-bookings/:user_id - Historial de reservas");
    info!("   DELETE /users/delete/:user_id - Eliminar usuario (admin)");
    info!("🚗 Vehicles:");
    info!("   POST /vehicles/add - Crear vehículo (admin)");
    info!("   GET  /vehicles/all - Listar vehículos");
    info!("   GET  /vehicles/types - Tipos de vehículo");
    info!("   GET  /vehicles/vehicle-by-id/:vehicle_id - Obtener vehículo");
    info!("   GET  /vehicles/all-available-vehicles - Vehículos sin reservas");
    info!("   GET  /vehicles/available-vehicles-by-date-and-type - Buscar disponibles");
    info!("   PUT  /vehicles/update/:vehicle_id - Actualizar vehículo (admin)");
    info!("   DELETE /vehicles/delete/:vehicle_id - Eliminar vehículo (admin)");
    info!("📅 Bookings:");
    info!("   POST /bookings/book-vehicle/:vehicle_id/:user_id - Reservar");
    info!("   GET  /bookings/all - Listar reservas (admin)");
    info!("   GET  /bookings/get-by-confirmation-code/:code - Buscar por código");
    info!("   DELETE /bookings/cancel/:booking_id - Cancelar reserva");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
