use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::UserRole;
use crate::models::evaluation_items::requests::SyncEvaluationItemsRequest;
use crate::services::EvaluationItemService;
use crate::utils::SafeGroupIdI64;

// 懒加载的全局 EVALUATION_ITEM_SERVICE 实例
static EVALUATION_ITEM_SERVICE: Lazy<EvaluationItemService> =
    Lazy::new(EvaluationItemService::new_lazy);

// HTTP处理程序
pub async fn list_items(req: HttpRequest, group_id: SafeGroupIdI64) -> ActixResult<HttpResponse> {
    EVALUATION_ITEM_SERVICE.list_items(&req, group_id.0).await
}

pub async fn sync_items(
    req: HttpRequest,
    group_id: SafeGroupIdI64,
    sync_data: web::Json<SyncEvaluationItemsRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_ITEM_SERVICE
        .sync_items(&req, group_id.0, sync_data.into_inner())
        .await
}

// 配置路由
pub fn configure_evaluation_items_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/groups")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/{group_id}/evaluation-items")
                    .route(
                        web::get()
                            .to(list_items)
                            .wrap(middlewares::RequireRole::new_any(UserRole::all_roles())),
                    )
                    .route(
                        // 期望状态同步，教师与管理员可用
                        web::put()
                            .to(sync_items)
                            .wrap(middlewares::RequireRole::new_any(UserRole::professor_roles())),
                    ),
            ),
    );
}
