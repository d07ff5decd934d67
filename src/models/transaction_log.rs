use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record;

record! {
    /// Card terminal transaction as received from the payment switch.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct TransactionLog: "transaction_logs" {
        #[field(json = "id", store = "primaryKey;autoIncrement;column:id", ui = "sortable")]
        pub id: i64,
        #[field(json = "serial_number", store = "column:serial_number;size:50", ui = "visible;filterable;sortable")]
        pub serial_number: String,
        #[field(json = "device_id", store = "column:device_id;size:100", ui = "filterable;sortable")]
        pub device_id: String,
        #[field(json = "trx_id", store = "column:trx_id;size:80;not null;unique", ui = "visible;filterable;sortable")]
        pub trx_id: String,
        #[field(json = "trx_type", store = "column:trx_type;size:255", ui = "visible;filterable;sortable")]
        pub trx_type: String,
        #[field(json = "amount", store = "column:amount", ui = "visible;filterable;sortable")]
        pub amount: i64,
        #[field(json = "trx_date", store = "column:trx_date", ui = "visible;filterable;sortable")]
        pub trx_date: Option<DateTime<Utc>>,
        #[field(json = "track_ksn_index", store = "column:track_ksn_index;size:255")]
        pub track_ksn_index: String,
        #[field(json = "amount_ksn_index", store = "column:amount_ksn_index;size:255")]
        pub amount_ksn_index: String,
        #[field(json = "emv_ksn_index", store = "column:emv_ksn_index;size:255")]
        pub emv_ksn_index: String,
        #[field(json = "pin_ksn_index", store = "column:pin_ksn_index;size:255")]
        pub pin_ksn_index: String,
        #[field(json = "tid", store = "column:tid;size:20", ui = "visible;filterable;sortable")]
        pub tid: String,
        #[field(json = "mid", store = "column:mid;size:20", ui = "visible;filterable;sortable")]
        pub mid: String,
        #[field(json = "response_code", store = "column:response_code;size:10", ui = "visible;filterable;sortable")]
        pub response_code: String,
        #[field(json = "request_data", store = "column:request_data;type:longtext")]
        pub request_data: String,
        #[field(json = "response_data", store = "column:response_data;type:longtext")]
        pub response_data: String,
        #[field(json = "batch_num", store = "column:batch_num;size:50", ui = "visible;filterable;sortable")]
        pub batch_num: String,
        #[field(json = "approval_code", store = "column:approval_code;size:50", ui = "visible;filterable;sortable")]
        pub approval_code: String,
        #[field(json = "invoice_num", store = "column:invoice_num;size:50", ui = "visible;filterable;sortable")]
        pub invoice_num: String,
        #[field(json = "rrn", store = "column:rrn;size:50", ui = "visible;filterable;sortable")]
        pub rrn: String,
        #[field(json = "account_number", store = "column:account_number;size:255", ui = "visible;filterable;sortable")]
        pub account_number: String,
        #[field(json = "account_name", store = "column:account_name;size:255", ui = "visible;filterable;sortable")]
        pub account_name: String,
        #[field(json = "account_bank", store = "column:account_bank;size:255", ui = "visible;filterable;sortable")]
        pub account_bank: String,
        #[field(json = "codebic", store = "column:codebic;size:255")]
        pub codebic: String,
        #[field(json = "special_trx", store = "column:special_trx", ui = "visible;filterable;sortable")]
        pub special_trx: bool,
        #[field(json = "paid_time", store = "column:paid_time", ui = "visible;filterable;sortable")]
        pub paid_time: Option<DateTime<Utc>>,
        #[field(json = "send_to_odoo", store = "column:send_to_odoo", ui = "visible;filterable;sortable")]
        pub send_to_odoo: bool,
        #[field(json = "send_to_odoo_at", store = "column:send_to_odoo_at", ui = "visible;filterable;sortable")]
        pub send_to_odoo_at: Option<DateTime<Utc>>,
        #[field(json = "created_at", store = "column:created_at", ui = "visible;filterable;sortable")]
        pub created_at: DateTime<Utc>,
        #[field(json = "updated_at", store = "column:updated_at", ui = "visible;filterable;sortable")]
        pub updated_at: DateTime<Utc>,
    }
}
