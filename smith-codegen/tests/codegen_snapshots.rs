//! Snapshot tests for generated code.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use serde_json::{Value, json};
use typesmith_codegen::{Language, generate_with};

fn order() -> Value {
    json!({
        "order_id": 1042,
        "total": 99.5,
        "paid": true,
        "note": null,
        "customer": {"first_name": "Ann", "vip": false},
        "line_items": [{"sku": "A-1", "qty": 2}],
        "tags": ["gift"]
    })
}

fn emit(language: Language) -> String {
    generate_with(&order(), language, "Order", true)
}

#[test]
fn test_typescript_order() {
    insta::assert_snapshot!(emit(Language::TypeScript), @r#"
interface Order {
  order_id: number;
  total: number;
  paid: boolean;
  note: any;
  customer: Customer;
  line_items: LineItemsItem[];
  tags: string[];
}

interface Customer {
  first_name: string;
  vip: boolean;
}

interface LineItemsItem {
  sku: string;
  qty: number;
}
"#);
}

#[test]
fn test_rust_order() {
    insta::assert_snapshot!(emit(Language::Rust), @r#"
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub total: f64,
    pub paid: bool,
    pub note: Option<serde_json::Value>,
    pub customer: Customer,
    pub line_items: Vec<LineItemsItem>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub first_name: String,
    pub vip: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemsItem {
    pub sku: String,
    pub qty: i64,
}
"#);
}

#[test]
fn test_swift_order() {
    insta::assert_snapshot!(emit(Language::Swift), @r#"
struct Order: Codable {
    var orderId: Int?
    var total: Double?
    var paid: Bool?
    var note: Any?
    var customer: Customer?
    var lineItems: [LineItemsItem]?
    var tags: [String]?

    enum CodingKeys: String, CodingKey {
        case orderId = "order_id"
        case total
        case paid
        case note
        case customer
        case lineItems = "line_items"
        case tags
    }
}

struct Customer: Codable {
    var firstName: String?
    var vip: Bool?

    enum CodingKeys: String, CodingKey {
        case firstName = "first_name"
        case vip
    }
}

struct LineItemsItem: Codable {
    var sku: String?
    var qty: Int?
}
"#);
}

#[test]
fn test_kotlin_order() {
    insta::assert_snapshot!(emit(Language::Kotlin), @r#"
import kotlinx.serialization.SerialName
import kotlinx.serialization.Serializable

@Serializable
data class Order(
    @SerialName("order_id")
    val orderId: Int? = null,
    val total: Double? = null,
    val paid: Boolean? = null,
    val note: Any? = null,
    val customer: Customer? = null,
    @SerialName("line_items")
    val lineItems: List<LineItemsItem>? = null,
    val tags: List<String>? = null
)

@Serializable
data class Customer(
    @SerialName("first_name")
    val firstName: String? = null,
    val vip: Boolean? = null
)

@Serializable
data class LineItemsItem(
    val sku: String? = null,
    val qty: Int? = null
)
"#);
}

#[test]
fn test_objective_c_order() {
    insta::assert_snapshot!(emit(Language::ObjectiveC), @r#"
#import <Foundation/Foundation.h>
#import <YYModel/YYModel.h>

@class OrderCustomer;
@class OrderLineItemsItem;

@interface Order : NSObject <YYModel>

@property (nonatomic, assign) NSInteger orderId;
@property (nonatomic, assign) CGFloat total;
@property (nonatomic, assign) BOOL paid;
@property (nonatomic, strong) id note;
@property (nonatomic, strong) OrderCustomer *customer;
@property (nonatomic, copy) NSArray<OrderLineItemsItem *> *lineItems;
@property (nonatomic, copy) NSArray<NSString *> *tags;

@end

@interface OrderCustomer : NSObject <YYModel>

@property (nonatomic, copy) NSString *firstName;
@property (nonatomic, assign) BOOL vip;

@end

@interface OrderLineItemsItem : NSObject <YYModel>

@property (nonatomic, copy) NSString *sku;
@property (nonatomic, assign) NSInteger qty;

@end

// ════════════════════════════════════
// Order.m
// ════════════════════════════════════

#import "Order.h"

@implementation Order

+ (NSDictionary *)modelCustomPropertyMapper {
    return @{
        @"orderId": @"order_id",
        @"lineItems": @"line_items",
    };
}

+ (NSDictionary *)modelContainerPropertyGenericClass {
    return @{
        @"lineItems": [OrderLineItemsItem class],
    };
}

@end

@implementation OrderCustomer

+ (NSDictionary *)modelCustomPropertyMapper {
    return @{
        @"firstName": @"first_name",
    };
}

@end

@implementation OrderLineItemsItem

@end
"#);
}

#[test]
fn test_java_order() {
    insta::assert_snapshot!(emit(Language::Java), @r#"
import com.fasterxml.jackson.annotation.JsonProperty;
import java.util.List;

public class Order {
    @JsonProperty("order_id")
    private int orderId;
    private double total;
    private boolean paid;
    private Object note;
    private Customer customer;
    @JsonProperty("line_items")
    private List<LineItemsItem> lineItems;
    private List<String> tags;

    public int getOrderId() { return orderId; }
    public void setOrderId(int orderId) { this.orderId = orderId; }
    public double getTotal() { return total; }
    public void setTotal(double total) { this.total = total; }
    public boolean getPaid() { return paid; }
    public void setPaid(boolean paid) { this.paid = paid; }
    public Object getNote() { return note; }
    public void setNote(Object note) { this.note = note; }
    public Customer getCustomer() { return customer; }
    public void setCustomer(Customer customer) { this.customer = customer; }
    public List<LineItemsItem> getLineItems() { return lineItems; }
    public void setLineItems(List<LineItemsItem> lineItems) { this.lineItems = lineItems; }
    public List<String> getTags() { return tags; }
    public void setTags(List<String> tags) { this.tags = tags; }
}

class Customer {
    @JsonProperty("first_name")
    private String firstName;
    private boolean vip;

    public String getFirstName() { return firstName; }
    public void setFirstName(String firstName) { this.firstName = firstName; }
    public boolean getVip() { return vip; }
    public void setVip(boolean vip) { this.vip = vip; }
}

class LineItemsItem {
    private String sku;
    private int qty;

    public String getSku() { return sku; }
    public void setSku(String sku) { this.sku = sku; }
    public int getQty() { return qty; }
    public void setQty(int qty) { this.qty = qty; }
}
"#);
}

#[test]
fn test_csharp_order() {
    insta::assert_snapshot!(emit(Language::CSharp), @r#"
using System.Collections.Generic;
using System.Text.Json.Serialization;

public class Order
{
    [JsonPropertyName("order_id")]
    public int OrderId { get; set; }
    [JsonPropertyName("total")]
    public double Total { get; set; }
    [JsonPropertyName("paid")]
    public bool Paid { get; set; }
    [JsonPropertyName("note")]
    public object Note { get; set; }
    [JsonPropertyName("customer")]
    public Customer Customer { get; set; }
    [JsonPropertyName("line_items")]
    public List<LineItemsItem> LineItems { get; set; }
    [JsonPropertyName("tags")]
    public List<string> Tags { get; set; }
}

public class Customer
{
    [JsonPropertyName("first_name")]
    public string FirstName { get; set; }
    [JsonPropertyName("vip")]
    public bool Vip { get; set; }
}

public class LineItemsItem
{
    [JsonPropertyName("sku")]
    public string Sku { get; set; }
    [JsonPropertyName("qty")]
    public int Qty { get; set; }
}
"#);
}

#[test]
fn test_dart_order() {
    insta::assert_snapshot!(emit(Language::Dart), @r#"
class Order {
  int? orderId;
  double? total;
  bool? paid;
  dynamic note;
  Customer? customer;
  List<LineItemsItem>? lineItems;
  List<String>? tags;

  Order.fromJson(Map<String, dynamic> json) {
    orderId = json['order_id'];
    total = (json['total'] as num?)?.toDouble();
    paid = json['paid'];
    note = json['note'];
    customer = json['customer'] != null ? Customer.fromJson(json['customer']) : null;
    lineItems = (json['line_items'] as List?)?.map((e) => LineItemsItem.fromJson(e)).toList();
    tags = json['tags']?.cast<String>();
  }

  Map<String, dynamic> toJson() {
    final data = <String, dynamic>{};
    data['order_id'] = orderId;
    data['total'] = total;
    data['paid'] = paid;
    data['note'] = note;
    data['customer'] = customer?.toJson();
    data['line_items'] = lineItems?.map((e) => e.toJson()).toList();
    data['tags'] = tags;
    return data;
  }
}

class Customer {
  String? firstName;
  bool? vip;

  Customer.fromJson(Map<String, dynamic> json) {
    firstName = json['first_name'];
    vip = json['vip'];
  }

  Map<String, dynamic> toJson() {
    final data = <String, dynamic>{};
    data['first_name'] = firstName;
    data['vip'] = vip;
    return data;
  }
}

class LineItemsItem {
  String? sku;
  int? qty;

  LineItemsItem.fromJson(Map<String, dynamic> json) {
    sku = json['sku'];
    qty = json['qty'];
  }

  Map<String, dynamic> toJson() {
    final data = <String, dynamic>{};
    data['sku'] = sku;
    data['qty'] = qty;
    return data;
  }
}
"#);
}

#[test]
fn test_python_order() {
    insta::assert_snapshot!(emit(Language::Python), @r#"
{
    "order_id": 1042,
    "total": 99.5,
    "paid": True,
    "note": None,
    "customer": {
        "first_name": "Ann",
        "vip": False
    },
    "line_items": [
        {
            "sku": "A-1",
            "qty": 2
        }
    ],
    "tags": [
        "gift"
    ]
}
"#);
}

#[test]
fn test_ruby_order() {
    insta::assert_snapshot!(emit(Language::Ruby), @r#"
{
  order_id: 1042,
  total: 99.5,
  paid: true,
  note: nil,
  customer: {
    first_name: "Ann",
    vip: false
  },
  line_items: [
    {
      sku: "A-1",
      qty: 2
    }
  ],
  tags: [
    "gift"
  ]
}
"#);
}

#[test]
fn test_php_order() {
    insta::assert_snapshot!(emit(Language::Php), @r#"
$data = [
    'order_id' => 1042,
    'total' => 99.5,
    'paid' => true,
    'note' => null,
    'customer' => [
        'first_name' => 'Ann',
        'vip' => false
    ],
    'line_items' => [
        [
            'sku' => 'A-1',
            'qty' => 2
        ]
    ],
    'tags' => [
        'gift'
    ]
];
"#);
}
