/*
Create date : 2026-10-19
Description : Renders the cross-target benchmark comparison bar chart
              (QEMU AARCH64 / QEMU RISCV64 / SPIKE / BPIF3 / RASPI4)
              from the combined results csv through a QuickChart server.

History     : 2026-10-19       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod errors;

mod enums;

mod dto;

mod env_configuration;

mod traits;

mod model;
use model::configs::total_config::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod repository;
use repository::quickchart_repository_impl::*;

mod service;
use service::{chart_service_impl::*, csv_loader_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();

    let system_config = get_system_config_info();

    let _logger_handle: LoggerHandle =
        set_global_logger(system_config.log_directory(), system_config.log_level())
            .unwrap_or_else(|e| {
                eprintln!("[main] An issue occurred while initializing the logger. {:?}", e);
                std::process::exit(1)
            });

    info!("Performance graph program start!");

    /* Chart rendering service connection */
    let quickchart_repo: QuickChartRepositoryImpl =
        QuickChartRepositoryImpl::new(get_chart_service_config_info()).unwrap_or_else(|e| {
            error!("[main] An issue occurred while initializing quickchart_repo. {:?}", e);
            std::process::exit(1)
        });

    /* 의존 주입 */
    let csv_loader_service: CsvLoaderServiceImpl = CsvLoaderServiceImpl::new();
    let chart_service: ChartServiceImpl<QuickChartRepositoryImpl> = ChartServiceImpl::new(
        quickchart_repo,
        get_chart_config_info().clone(),
        get_chart_service_config_info().clone(),
    );

    let main_controller: MainController<
        CsvLoaderServiceImpl,
        ChartServiceImpl<QuickChartRepositoryImpl>,
    > = MainController::new(csv_loader_service, chart_service);

    if let Err(e) = main_controller
        .main_task(
            Path::new(system_config.input_csv_path()),
            Path::new(system_config.output_image_path()),
        )
        .await
    {
        error!("{:?}", e);
        std::process::exit(1)
    }
}
