//! Market operations: orders, own trades, stats, chart history.

use crate::client::NobitexClient;
use crate::core::currency::Currency;
use crate::core::errors::NobitexError;
use crate::core::kernel::{CacheMode, Params, Route};
use crate::core::types::{
    ChartResolution, DetailLevel, OrderExecution, OrderListSort, OrderMode, OrderSide,
    OrderStatusFilter, OrderStatusUpdate, QuoteCurrency, TradeType,
};
use reqwest::Method;
use rust_decimal::Decimal;
use serde_json::Value;

const RESOURCE: &str = "market";

/// A new order to be placed. Start from [`NewOrder::limit`] or
/// [`NewOrder::market`] and refine with the builder methods.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub side: OrderSide,
    pub src_currency: Currency,
    pub dst_currency: Currency,
    pub amount: Decimal,
    pub price: Decimal,
    pub execution: OrderExecution,
    pub mode: Option<OrderMode>,
    pub client_order_id: Option<String>,
    pub stop_price: Option<Decimal>,
    pub stop_limit_price: Option<Decimal>,
}

impl NewOrder {
    pub fn limit(
        side: OrderSide,
        src_currency: Currency,
        dst_currency: Currency,
        amount: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            side,
            src_currency,
            dst_currency,
            amount,
            price,
            execution: OrderExecution::Limit,
            mode: None,
            client_order_id: None,
            stop_price: None,
            stop_limit_price: None,
        }
    }

    pub fn market(
        side: OrderSide,
        src_currency: Currency,
        dst_currency: Currency,
        amount: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            execution: OrderExecution::Market,
            ..Self::limit(side, src_currency, dst_currency, amount, price)
        }
    }

    #[must_use]
    pub const fn execution(mut self, execution: OrderExecution) -> Self {
        self.execution = execution;
        self
    }

    #[must_use]
    pub const fn mode(mut self, mode: OrderMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = Some(id.into());
        self
    }

    #[must_use]
    pub const fn stop_price(mut self, price: Decimal) -> Self {
        self.stop_price = Some(price);
        self
    }

    #[must_use]
    pub const fn stop_limit_price(mut self, price: Decimal) -> Self {
        self.stop_limit_price = Some(price);
        self
    }
}

/// Filter for listing orders.
#[derive(Debug, Clone)]
pub struct OrderListQuery {
    pub side: OrderSide,
    pub trade_type: TradeType,
    pub src_currency: Currency,
    pub dst_currency: Currency,
    pub details: DetailLevel,
    pub from_id: i64,
    pub sort: Option<OrderListSort>,
    pub execution: OrderExecution,
    pub status: OrderStatusFilter,
}

impl OrderListQuery {
    pub fn new(
        side: OrderSide,
        trade_type: TradeType,
        src_currency: Currency,
        dst_currency: Currency,
    ) -> Self {
        Self {
            side,
            trade_type,
            src_currency,
            dst_currency,
            details: DetailLevel::Basic,
            from_id: 1,
            sort: None,
            execution: OrderExecution::Limit,
            status: OrderStatusFilter::Open,
        }
    }

    #[must_use]
    pub const fn details(mut self, details: DetailLevel) -> Self {
        self.details = details;
        self
    }

    #[must_use]
    pub const fn from_id(mut self, from_id: i64) -> Self {
        self.from_id = from_id;
        self
    }

    #[must_use]
    pub const fn sort(mut self, sort: OrderListSort) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub const fn execution(mut self, execution: OrderExecution) -> Self {
        self.execution = execution;
        self
    }

    #[must_use]
    pub const fn status(mut self, status: OrderStatusFilter) -> Self {
        self.status = status;
        self
    }
}

pub struct MarketApi<'a> {
    client: &'a NobitexClient,
}

impl<'a> MarketApi<'a> {
    pub(crate) fn new(client: &'a NobitexClient) -> Self {
        Self { client }
    }

    fn route(segments: &[&str]) -> Route {
        let mut route = Route::new(RESOURCE);
        for segment in segments {
            route = route.segment(*segment);
        }
        route
    }

    /// Place a new order.
    pub async fn add_order(&self, order: NewOrder) -> Result<Value, NobitexError> {
        let body = Params::new()
            .insert("type", order.side.as_str())
            .insert("srcCurrency", order.src_currency.symbol)
            .insert("dstCurrency", order.dst_currency.symbol)
            .insert("amount", order.amount.to_string())
            .insert("price", order.price.to_string())
            .insert("execution", order.execution.as_str())
            .insert_opt("mode", order.mode.map(OrderMode::as_str))
            .insert_opt("clientOrderId", order.client_order_id)
            .insert_opt("stopPrice", order.stop_price.map(|p| p.to_string()))
            .insert_opt(
                "stopLimitPrice",
                order.stop_limit_price.map(|p| p.to_string()),
            )
            .into_body();

        self.client
            .dispatcher
            .send(
                Method::POST,
                &Self::route(&["orders", "add"]).to_path(),
                vec![],
                vec![],
                Some(body),
                CacheMode::Bypass,
            )
            .await
    }

    /// Status of one order, by id or client order id.
    pub async fn order_status(
        &self,
        id: i64,
        client_order_id: Option<&str>,
    ) -> Result<Value, NobitexError> {
        let body = Params::new()
            .insert("id", id)
            .insert_opt("clientOrderId", client_order_id)
            .into_body();

        self.client
            .dispatcher
            .send(
                Method::POST,
                &Self::route(&["orders", "status"]).to_path(),
                vec![],
                vec![],
                Some(body),
                CacheMode::Bypass,
            )
            .await
    }

    /// Orders matching `query`.
    pub async fn list_orders(&self, query: OrderListQuery) -> Result<Value, NobitexError> {
        let body = Params::new()
            .insert("type", query.side.as_str())
            .insert("tradeType", query.trade_type.as_str())
            .insert("srcCurrency", query.src_currency.symbol)
            .insert("dstCurrency", query.dst_currency.symbol)
            .insert("details", query.details.as_u8())
            .insert("fromId", query.from_id)
            .insert_opt("order", query.sort.map(OrderListSort::as_str))
            .insert("execution", query.execution.as_str())
            .insert("status", query.status.as_str())
            .into_body();

        // The API reads this filter from the request body of a GET.
        self.client
            .dispatcher
            .send(
                Method::GET,
                &Self::route(&["orders", "list"]).to_path(),
                vec![],
                vec![],
                Some(body),
                CacheMode::Bypass,
            )
            .await
    }

    /// Activate or cancel an order.
    pub async fn update_order_status(
        &self,
        status: OrderStatusUpdate,
        order_id: Option<i64>,
        client_order_id: Option<&str>,
    ) -> Result<Value, NobitexError> {
        let body = Params::new()
            .insert("status", status.as_str())
            .insert_opt("order", order_id)
            .insert_opt("clientOrderId", client_order_id)
            .into_body();

        self.client
            .dispatcher
            .send(
                Method::POST,
                &Self::route(&["orders", "update-status"]).to_path(),
                vec![],
                vec![],
                Some(body),
                CacheMode::Bypass,
            )
            .await
    }

    /// Cancel orders older than `hours`, optionally narrowed by execution,
    /// trade type, or market.
    pub async fn cancel_old_orders(
        &self,
        hours: f64,
        execution: Option<OrderExecution>,
        trade_type: Option<TradeType>,
        src_currency: Option<Currency>,
        dst_currency: Option<Currency>,
    ) -> Result<Value, NobitexError> {
        let body = Params::new()
            .insert("hours", hours)
            .insert_opt("execution", execution.map(OrderExecution::as_str))
            .insert_opt("tradeType", trade_type.map(TradeType::as_str))
            .insert_opt("srcCurrency", src_currency.map(|c| c.symbol))
            .insert_opt("dstCurrency", dst_currency.map(|c| c.symbol))
            .into_body();

        self.client
            .dispatcher
            .send(
                Method::POST,
                &Self::route(&["orders", "cancel-old"]).to_path(),
                vec![],
                vec![],
                Some(body),
                CacheMode::Bypass,
            )
            .await
    }

    /// The account's trades, optionally narrowed by market.
    pub async fn list_trades(
        &self,
        src_currency: Option<Currency>,
        dst_currency: Option<Currency>,
        from_id: Option<i64>,
    ) -> Result<Value, NobitexError> {
        let query = Params::new()
            .insert_opt("srcCurrency", src_currency.map(|c| c.symbol))
            .insert_opt("dstCurrency", dst_currency.map(|c| c.symbol))
            .insert_opt("fromId", from_id)
            .into_query();

        self.client
            .dispatcher
            .send(
                Method::GET,
                &Self::route(&["trades", "list"]).to_path(),
                vec![],
                query,
                None,
                CacheMode::Bypass,
            )
            .await
    }

    /// Market statistics, optionally narrowed by market.
    pub async fn stats(
        &self,
        src_currency: Option<Currency>,
        dst_currency: Option<Currency>,
    ) -> Result<Value, NobitexError> {
        let query = Params::new()
            .insert_opt("srcCurrency", src_currency.map(|c| c.symbol))
            .insert_opt("dstCurrency", dst_currency.map(|c| c.symbol))
            .into_query();

        self.client
            .dispatcher
            .send(
                Method::GET,
                &Self::route(&["stats"]).to_path(),
                vec![],
                query,
                None,
                CacheMode::cached(),
            )
            .await
    }

    /// UDF candle history for charting.
    #[allow(clippy::too_many_arguments)]
    pub async fn udf_history(
        &self,
        symbol: Currency,
        quote: QuoteCurrency,
        resolution: ChartResolution,
        to: i64,
        from: Option<i64>,
        count_back: Option<i64>,
        page: Option<i64>,
    ) -> Result<Value, NobitexError> {
        let query = Params::new()
            .insert("symbol", symbol.resolve(quote)?)
            .insert("resolution", resolution.as_str())
            .insert("to", to)
            .insert_opt("from", from)
            .insert_opt("countBack", count_back)
            .insert_opt("page", page)
            .into_query();

        self.client
            .dispatcher
            .send(
                Method::GET,
                &Self::route(&["udf", "history"]).to_path(),
                vec![],
                query,
                None,
                CacheMode::cached(),
            )
            .await
    }

    /// Global (cross-exchange) market statistics.
    pub async fn global_stats(&self) -> Result<Value, NobitexError> {
        self.client
            .dispatcher
            .send(
                Method::POST,
                &Self::route(&["global-stats"]).to_path(),
                vec![],
                vec![],
                None,
                CacheMode::cached(),
            )
            .await
    }
}
